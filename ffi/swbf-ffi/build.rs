use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=SWBF_NATIVE_LIB_DIR");
    println!("cargo:rerun-if-changed=build.rs");

    // Without a library directory the native libraries must already be on
    // the default linker search path.
    if let Ok(dir) = env::var("SWBF_NATIVE_LIB_DIR") {
        let dir = PathBuf::from(dir);
        println!("cargo:rustc-link-search=native={}", dir.display());
    }

    println!("cargo:rustc-link-lib=dylib=LibSWBF2");
    println!("cargo:rustc-link-lib=dylib=ConverterLib");
}
