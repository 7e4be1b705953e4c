use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbImage};
use image_mirror::{Mirror, RunLog, RunSummary};
use image_mirror_config::MirrorConfig;
use image_mirror_transform::ImageResizer;
use tempfile::TempDir;

const THRESHOLD: usize = 600 * 1024;

struct Tree {
    dir: TempDir,
}

impl Tree {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        Self { dir }
    }

    fn source(&self) -> PathBuf {
        self.dir.path().join("src")
    }

    fn dest(&self) -> PathBuf {
        self.dir.path().join("dst")
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("error_log.txt")
    }

    fn write(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = self.source().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, bytes).unwrap();
        path
    }

    fn run(&self) -> RunSummary {
        let config = MirrorConfig {
            concurrency: 4,
            ..MirrorConfig::default()
        };
        let log = RunLog::open(&self.log_path()).unwrap();
        Mirror::new(config, ImageResizer::new(), log)
            .run(&self.source(), &self.dest(), |_| {})
            .unwrap()
    }

    fn log_lines(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// PNG of pseudo-random pixels, large enough to stay above the threshold.
fn noisy_png(width: u32, height: u32) -> Vec<u8> {
    let mut seed: u32 = 0x1234_5678;
    let image = RgbImage::from_fn(width, height, |_, _| {
        let mut next = || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 24) as u8
        };
        image::Rgb([next(), next(), next()])
    });

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    assert!(bytes.len() > THRESHOLD, "fixture must exceed the threshold");
    bytes
}

fn garbage(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

#[test]
fn test_large_image_resized_to_target_width() {
    let tree = Tree::new();
    tree.write("albums/2024/photo.png", &noisy_png(800, 600));

    let summary = tree.run();

    assert_eq!(summary.total, 1);
    assert_eq!(summary.transformed, 1);
    assert!(summary.is_complete());
    let output = tree.dest().join("albums/2024/photo.png");
    assert_eq!(dimensions(&output), (500, 375));
    assert!(tree.log_lines().is_empty());
}

#[test]
fn test_threshold_boundary() {
    let tree = Tree::new();
    let at = garbage(THRESHOLD);
    let above = garbage(THRESHOLD + 1);
    tree.write("at.jpg", &at);
    let above_path = tree.write("above.jpg", &above);

    let summary = tree.run();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.copied, 2);
    // only the file above the threshold went through the transform
    assert_eq!(summary.degraded, 1);
    assert_eq!(fs::read(tree.dest().join("at.jpg")).unwrap(), at);
    assert_eq!(fs::read(tree.dest().join("above.jpg")).unwrap(), above);

    let lines = tree.log_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(&above_path.display().to_string()));
}

#[test]
fn test_thumbnails_never_mirrored() {
    let tree = Tree::new();
    tree.write("thumb-avatar.png", b"root thumb");
    tree.write("users/alice/thumb-avatar.png", b"nested thumb");
    tree.write("users/alice/avatar.png", b"avatar");

    let summary = tree.run();

    assert_eq!(summary.total, 1);
    assert_eq!(summary.skipped, 2);
    assert!(!tree.dest().join("thumb-avatar.png").exists());
    assert!(!tree.dest().join("users/alice/thumb-avatar.png").exists());
    assert_eq!(
        fs::read(tree.dest().join("users/alice/avatar.png")).unwrap(),
        b"avatar"
    );
}

#[test]
fn test_second_run_reproduces_output() {
    let tree = Tree::new();
    tree.write("a/large.png", &noisy_png(700, 500));
    tree.write("a/b/small.txt", b"small file");

    let first = tree.run();
    let large_first = fs::read(tree.dest().join("a/large.png")).unwrap();
    let small_first = fs::read(tree.dest().join("a/b/small.txt")).unwrap();

    let second = tree.run();
    let large_second = fs::read(tree.dest().join("a/large.png")).unwrap();
    let small_second = fs::read(tree.dest().join("a/b/small.txt")).unwrap();

    assert_eq!(first, second);
    assert_eq!(large_first, large_second);
    assert_eq!(small_first, small_second);
}

#[test]
fn test_empty_directories_mirrored() {
    let tree = Tree::new();
    fs::create_dir_all(tree.source().join("x/y/z")).unwrap();

    let summary = tree.run();

    assert_eq!(summary, RunSummary::default());
    assert!(tree.dest().join("x/y/z").is_dir());
}

#[cfg(unix)]
#[test]
fn test_unreadable_sibling_does_not_stop_run() {
    use std::os::unix::fs::PermissionsExt;

    let tree = Tree::new();
    tree.write("locked/hidden.jpg", b"unreachable");
    tree.write("open/one.jpg", b"one");
    tree.write("open/two.jpg", b"two");

    let locked = tree.source().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users ignore directory permissions
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("skipping: {} is still readable with mode 000", locked.display());
        return;
    }

    let summary = tree.run();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(summary.total, 2);
    assert!(summary.is_complete());
    assert_eq!(fs::read(tree.dest().join("open/one.jpg")).unwrap(), b"one");
    assert_eq!(fs::read(tree.dest().join("open/two.jpg")).unwrap(), b"two");
    assert!(!tree.dest().join("locked/hidden.jpg").exists());
    assert!(tree.dest().join("locked").is_dir());

    let lines = tree.log_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(&locked.display().to_string()));
}
