use std::path::Path;

const REQUIRED_ASSETS: &[&str] = &[
    "assets/favicon.svg",
    "assets/tailwind.css",
    "assets/styling/main.css",
    "assets/styling/header.css",
];

fn main() {
    // Stylesheets are bundled through `asset!`, so rebuild when any of them change
    println!("cargo:rerun-if-changed=assets/");

    for asset in REQUIRED_ASSETS {
        if !Path::new(asset).is_file() {
            println!("cargo:warning=Missing bundled asset: {}", asset);
        }
    }
}
