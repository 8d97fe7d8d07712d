fn main() {
    flopscope::cli::run();
}
