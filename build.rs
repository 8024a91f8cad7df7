#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/resetboard.ico must exist for Windows builds
    let mut res = WindowsResource::new();
    res.set_icon("res/resetboard.ico")
        .set("FileDescription", "resetboard CLI")
        .set("ProductName", "resetboard")
        .set("OriginalFilename", "resetboard.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
