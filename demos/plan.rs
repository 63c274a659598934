use anyhow::Context;
use tracing_subscriber::EnvFilter;
use vfs_tree::{FsBackend, MapFS};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .compact()
        .init();

    // the tree as found on disk
    let mut fs = MapFS::new();
    fs.mkdir("/home/goggle/Downloads/test")?;
    fs.mkfile("/home/goggle/Downloads/movie.mp4")?;
    fs.mkfile("/home/goggle/Downloads/test/lichess.tar.gz")?;

    // flatten: pull every nested file up into Downloads
    let nested = fs.get_files("/home/goggle/Downloads", false)?;
    for file in &nested {
        let target = format!("/home/goggle/Downloads/{}", file.name());
        fs.mv(file.full_path(), &target)
            .with_context(|| format!("cannot move {} to {}", file, target))?;
    }
    fs.rm_dir("/home/goggle/Downloads/test")?;

    // what we expect to see afterwards
    let mut expected = MapFS::new();
    expected.mkfile("/home/goggle/Downloads/movie.mp4")?;
    expected.mkfile("/home/goggle/Downloads/lichess.tar.gz")?;

    for dir in fs.dirs() {
        println!("d {dir}");
    }
    for file in fs.real_files() {
        println!("f {file}");
    }
    println!("plan matches expectation: {}", fs.equal(&expected));

    Ok(())
}
