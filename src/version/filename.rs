//! Version extraction from distribution filenames
//!
//! Expected shapes:
//! - wheel: `{name}-{version}-{python}-{abi}-{platform}.whl`
//! - sdist: `{name}-{version}.tar.gz` or `{name}-{version}.zip`
//!
//! `{name}` is the package name with `-` replaced by `_`. Filenames of any
//! other shape (extra or missing tags, other extensions) come out wrong.

/// Number of trailing `-` separated tags on a wheel filename
const WHEEL_TAG_COUNT: usize = 3;

const SDIST_SUFFIXES: [&str; 2] = [".tar.gz", ".zip"];

/// Derive the version from one filename listed by the index for `package_name`
pub fn filename_to_version(package_name: &str, filename: &str) -> String {
    let prefix = format!("{}-", package_name.replace('-', "_"));
    let rest = filename.strip_prefix(&prefix).unwrap_or(filename);

    // Everything left of the last three tags; the whole string if it has fewer
    let version = rest
        .rsplitn(WHEEL_TAG_COUNT + 1, '-')
        .last()
        .unwrap_or(rest);

    SDIST_SUFFIXES
        .iter()
        .find_map(|suffix| version.strip_suffix(*suffix))
        .unwrap_or(version)
        .to_string()
}
