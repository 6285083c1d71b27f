fn main() {
    std::process::exit(iconset::run() as i32);
}
