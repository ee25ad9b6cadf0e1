fn main() {
    netuno_harness::cli::run();
}
