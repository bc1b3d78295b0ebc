fn main() {
    provisioner::app::cli::run();
}
