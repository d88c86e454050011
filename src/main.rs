fn main() {
    etcd_render::app::cli::run();
}
