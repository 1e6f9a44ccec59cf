//! Platform target matrix and the archive naming contract.
//!
//! The matrix is an explicit, swappable table of
//! (OS, architecture, nickname, executable, archive format) tuples rather
//! than inline branching, so new targets or naming changes are additive.
//! Archives are always named `<program>-<tag>-<nickname>.<ext>`.

use serde::Deserialize;
use std::fmt;

/// Archive container format for a packaged executable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ArchiveFormat {
    /// `.zip`
    #[serde(rename = "zip")]
    Zip,
    /// gzip-compressed tarball, `.tar.gz`
    #[serde(rename = "tar.gz")]
    TarGz,
}

impl ArchiveFormat {
    /// File extension used in archive names
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => "zip",
            ArchiveFormat::TarGz => "tar.gz",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A single cross-compilation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Target operating system (`GOOS` value)
    pub os: String,
    /// Target CPU architecture (`GOARCH` value)
    pub arch: String,
    /// Platform nickname used in archive names
    pub nickname: String,
    /// Name of the produced executable
    pub executable: String,
    /// Archive container format
    pub format: ArchiveFormat,
}

impl Target {
    /// Create a target entry
    pub fn new(
        os: impl Into<String>,
        arch: impl Into<String>,
        nickname: impl Into<String>,
        executable: impl Into<String>,
        format: ArchiveFormat,
    ) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
            nickname: nickname.into(),
            executable: executable.into(),
            format,
        }
    }

    /// Archive file name for this target under the given program and tag
    pub fn archive_name(&self, program: &str, tag: &str) -> String {
        format!("{program}-{tag}-{}.{}", self.nickname, self.format.extension())
    }
}

/// Universal mac build configuration.
///
/// The listed architectures are built separately, merged into one fat
/// executable, and only the merged executable is archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversalSpec {
    /// Target operating system (`GOOS` value, normally `darwin`)
    pub os: String,
    /// Architectures to build and merge, in build order
    pub arches: Vec<String>,
    /// Platform nickname used in the archive name
    pub nickname: String,
    /// Name of the merged executable
    pub executable: String,
    /// Archive container format
    pub format: ArchiveFormat,
}

impl UniversalSpec {
    /// Archive file name for the merged build under the given program and tag
    pub fn archive_name(&self, program: &str, tag: &str) -> String {
        format!("{program}-{tag}-{}.{}", self.nickname, self.format.extension())
    }

    /// Name of the single-architecture intermediate executable
    pub fn intermediate_name(&self, arch: &str) -> String {
        format!("{}-{arch}", self.executable)
    }
}

/// Ordered release matrix: program name, optional universal mac build, and
/// the per-platform target table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMatrix {
    /// Program name used as the archive name prefix
    pub program: String,
    /// Linker variable receiving the release tag, e.g.
    /// `github.com/codecomet-io/cli/cmd.CurrentVersion`
    pub version_var: Option<String>,
    /// Universal mac build, when this matrix ships one
    pub universal: Option<UniversalSpec>,
    /// Per-platform targets, in build order
    pub targets: Vec<Target>,
}

impl TargetMatrix {
    /// The current release matrix.
    ///
    /// Per-architecture builds for linux and macOS plus a single amd64
    /// windows build; linux archives are tarballs, everything else is
    /// zipped. The release tag is baked into the binary so
    /// `codecomet version` prints it.
    pub fn current() -> Self {
        Self {
            program: "codecomet".to_string(),
            version_var: Some("github.com/codecomet-io/cli/cmd.CurrentVersion".to_string()),
            universal: None,
            targets: vec![
                Target::new("linux", "amd64", "linux-amd64", "codecomet", ArchiveFormat::TarGz),
                Target::new("linux", "arm64", "linux-arm64", "codecomet", ArchiveFormat::TarGz),
                Target::new("darwin", "amd64", "macOS-amd64", "codecomet", ArchiveFormat::Zip),
                Target::new("darwin", "arm64", "macOS-arm64", "codecomet", ArchiveFormat::Zip),
                Target::new("windows", "amd64", "win64", "codecomet.exe", ArchiveFormat::Zip),
            ],
        }
    }

    /// Earlier revision of the release matrix: a universal mac archive plus
    /// zip-only linux and windows builds, without version embedding.
    ///
    /// Kept because archives named this way are still published; prefer
    /// [`TargetMatrix::current`] for new releases.
    pub fn osx_universal_cross() -> Self {
        Self {
            program: "codecomet".to_string(),
            version_var: None,
            universal: Some(UniversalSpec {
                os: "darwin".to_string(),
                arches: vec!["amd64".to_string(), "arm64".to_string()],
                nickname: "osx-universal".to_string(),
                executable: "codecomet".to_string(),
                format: ArchiveFormat::Zip,
            }),
            targets: vec![
                Target::new("linux", "amd64", "linux-x86_64", "codecomet", ArchiveFormat::Zip),
                Target::new("windows", "amd64", "win64", "codecomet.exe", ArchiveFormat::Zip),
            ],
        }
    }

    /// The first revision of the release matrix: only the universal mac
    /// archive, nothing else.
    ///
    /// Kept for the same reason as [`TargetMatrix::osx_universal_cross`].
    pub fn mac_only() -> Self {
        Self {
            program: "codecomet".to_string(),
            version_var: None,
            universal: Some(UniversalSpec {
                os: "darwin".to_string(),
                arches: vec!["amd64".to_string(), "arm64".to_string()],
                nickname: "osx-universal".to_string(),
                executable: "codecomet".to_string(),
                format: ArchiveFormat::Zip,
            }),
            targets: Vec::new(),
        }
    }

    /// Look up a built-in matrix by CLI name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "current" => Some(Self::current()),
            "osx-universal-cross" => Some(Self::osx_universal_cross()),
            "mac-only" => Some(Self::mac_only()),
            _ => None,
        }
    }

    /// All archive file names this matrix produces for the given tag, in
    /// build order (universal build first, then the target table).
    pub fn archive_names(&self, tag: &str) -> Vec<String> {
        let mut names = Vec::new();
        if let Some(universal) = &self.universal {
            names.push(universal.archive_name(&self.program, tag));
        }
        for target in &self.targets {
            names.push(target.archive_name(&self.program, tag));
        }
        names
    }
}
