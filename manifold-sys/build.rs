use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=NANOMSG_LIB_DIR");
    println!("cargo:rerun-if-env-changed=NANOMSG_STATIC");

    if let Ok(dir) = env::var("NANOMSG_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
    }

    let kind = if env::var_os("NANOMSG_STATIC").is_some() {
        "static"
    } else {
        "dylib"
    };
    println!("cargo:rustc-link-lib={kind}=nanomsg");
}
