fn main() {
    qz_cli::init_tracing();
    std::process::exit(qz_cli::run_cli_from_args(std::env::args_os()));
}
