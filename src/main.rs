fn main() {
    courseplan::app::cli::run();
}
