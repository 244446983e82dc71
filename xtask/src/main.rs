use brass_bootstrap::Assets;

const DEMO_DIR: &str = "demos/modal";

fn execute(dir: &str, args: &[&str]) {
    let cmd = &args[0];
    let cmd_full = args.join(" ");
    eprintln!("Running '{}'", cmd_full);
    let status = std::process::Command::new(cmd)
        .current_dir(dir)
        .args(&args[1..])
        .spawn()
        .unwrap_or_else(|err| panic!("Could not start command '{}': {}", cmd_full, err))
        .wait()
        .unwrap_or_else(|err| panic!("cmd failed: '{}': {}", cmd_full, err));

    if !status.success() {
        eprintln!("Command '{}' terminated with a non-0 exit code", cmd_full);
        std::process::exit(1);
    }
    eprintln!("Finished: '{}'", cmd_full);
}

fn index_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>brass bootstrap demo</title>
{}
</head>
<body>
<script type="module">
import init from "./brass_bootstrap_demo.js";
init();
</script>
</body>
</html>
"#,
        Assets::default().head_html()
    )
}

fn demo_build() {
    execute(
        DEMO_DIR,
        &["cargo", "build", "--target", "wasm32-unknown-unknown"],
    );
    execute(
        "./",
        &[
            "wasm-bindgen",
            "--target",
            "web",
            "--no-typescript",
            "--out-dir",
            "demos/modal/pkg",
            "./target/wasm32-unknown-unknown/debug/brass_bootstrap_demo.wasm",
        ],
    );
    let path = format!("{}/pkg/index.html", DEMO_DIR);
    std::fs::write(&path, index_html())
        .unwrap_or_else(|err| panic!("Could not write '{}': {}", path, err));
    eprintln!("Wrote '{}'", path);
}

fn demo_serve() {
    execute(
        "./",
        &[
            "cargo",
            "watch",
            "-w",
            "demos/modal/src",
            "-w",
            "brass/src",
            "-w",
            "brass_bootstrap/src",
            "-s",
            "cargo xtask demo-build",
        ],
    );
}

fn main() {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let arg_refs: Vec<_> = args.iter().map(|x| x.as_str()).collect();

    match arg_refs.as_slice() {
        &["demo-build"] => {
            demo_build();
        }
        &["demo-serve"] => {
            demo_serve();
        }
        &["index-html"] => {
            print!("{}", index_html());
        }
        _ => {
            eprint!("Unknown arguments");
            std::process::exit(1);
        }
    }
}
