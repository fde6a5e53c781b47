//! Records the build target and profile for `alluxio-wire version --extended`.

const EXPORTS: [(&str, &str); 2] = [
    ("TARGET", "ALLUXIO_WIRE_BUILD_TARGET"),
    ("PROFILE", "ALLUXIO_WIRE_BUILD_PROFILE"),
];

fn main() {
    for (source, exported) in EXPORTS {
        if let Ok(value) = std::env::var(source) {
            println!("cargo:rustc-env={exported}={value}");
        }
        println!("cargo:rerun-if-env-changed={source}");
    }
}
