//! Build script rendering `private_cdn(1)` and one page per subcommand.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use clap_mangen::Man;

#[path = "src/cli.rs"]
mod cli;

fn render(man: &Man, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut buf: Vec<u8> = Vec::new();
    man.render(&mut buf)?;
    fs::write(path, buf)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from("target/generated-man");
    fs::create_dir_all(&out_dir)?;

    let cmd = cli::Cli::command();
    let bin_name = cmd.get_name();
    render(&Man::new(cmd.clone()), &out_dir.join(format!("{bin_name}.1")))?;

    // `private_cdn-unpad.1`, `private_cdn-pad.1`
    for sub in cmd.get_subcommands() {
        let title = format!("{bin_name}-{}", sub.get_name());
        let man = Man::new(sub.clone()).title(title.to_uppercase());
        render(&man, &out_dir.join(format!("{title}.1")))?;
    }

    Ok(())
}
