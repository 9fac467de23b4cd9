use std::process::Command;

fn git(args: &[&str]) -> Option<std::process::Output> {
    Command::new("git").args(args).output().ok()
}

fn main() {
    let build_rev = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(out) if out.status.success() => {
            let rev = String::from_utf8_lossy(&out.stdout).trim().to_string();
            let dirty = git(&["diff", "--quiet"])
                .map(|o| !o.status.success())
                .unwrap_or(false);
            if dirty { format!("{rev}-dirty") } else { rev }
        }
        _ => "unknown".to_string(),
    };

    println!("cargo:rustc-env=BUILD_REV={build_rev}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
