//! Demo content for an empty desktop.

use rand::Rng;

use crate::error::StateError;
use crate::filesystem::{EntryId, EntryKind, FileSystem};

/// Extensions handed out to generated files.
const EXTENSIONS: &[&str] = &[
    "txt", "md", "rs", "toml", "json", "csv", "png", "jpg", "pdf", "mp3", "zip",
];

/// Probability that a generated entry is a file rather than a folder.
const FILE_RATIO: f64 = 0.75;

/// Counts of what [`seed_directory`] created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub files: usize,
    pub directories: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.files + self.directories
    }
}

/// Populate `dir` with a fixed nested skeleton followed by exactly `count`
/// generated entries.
///
/// Generated files are named `File N.<ext>` and folders `Folder N`, with `N`
/// increasing across the whole run. Each folder takes a random share of the
/// remaining budget, so deeper levels hold fewer entries.
pub fn seed_directory<R: Rng + ?Sized>(
    fs: &mut FileSystem,
    dir: EntryId,
    count: usize,
    rng: &mut R,
) -> Result<SeedReport, StateError> {
    let mut seeder = Seeder {
        fs,
        rng,
        counter: 0,
        report: SeedReport::default(),
    };
    seeder.skeleton(dir)?;
    seeder.fill(dir, count, 0)?;
    Ok(seeder.report)
}

struct Seeder<'a, R: ?Sized> {
    fs: &'a mut FileSystem,
    rng: &'a mut R,
    counter: usize,
    report: SeedReport,
}

impl<R: Rng + ?Sized> Seeder<'_, R> {
    fn attach(&mut self, dir: EntryId, kind: EntryKind, name: &str) -> Result<EntryId, StateError> {
        let id = self.fs.create(kind, name);
        self.fs.add(dir, id)?;
        match kind {
            EntryKind::File => self.report.files += 1,
            EntryKind::Directory => self.report.directories += 1,
        }
        Ok(id)
    }

    fn numbered_dir(&mut self, parent: EntryId, n: usize) -> Result<EntryId, StateError> {
        let dir = self.attach(parent, EntryKind::Directory, &format!("Directory {n}"))?;
        for i in 1..=3 {
            self.attach(dir, EntryKind::File, &format!("File {i}"))?;
        }
        Ok(dir)
    }

    fn skeleton(&mut self, root: EntryId) -> Result<(), StateError> {
        self.numbered_dir(root, 1)?;
        let second = self.numbered_dir(root, 2)?;
        self.numbered_dir(second, 1)?;
        let nested = self.numbered_dir(second, 2)?;
        self.numbered_dir(nested, 1)?;
        Ok(())
    }

    fn fill(&mut self, dir: EntryId, budget: usize, depth: usize) -> Result<(), StateError> {
        let mut remaining = budget;
        while remaining > 0 {
            remaining -= 1;
            self.counter += 1;
            let n = self.counter;

            if self.rng.gen_bool(FILE_RATIO) {
                let ext = EXTENSIONS[self.rng.gen_range(0..EXTENSIONS.len())];
                self.attach(dir, EntryKind::File, &format!("File {n}.{ext}"))?;
            } else {
                let folder = self.attach(dir, EntryKind::Directory, &format!("Folder {n}"))?;
                let share = self.rng.gen_range(0..=remaining / (depth + 2));
                remaining -= share;
                self.fill(folder, share, depth + 1)?;
            }
        }
        Ok(())
    }
}
