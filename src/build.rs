// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/ffme_import.ico");    // multi-size .ico
        res.compile().unwrap();
    }
}
