use crate::guide_set::AestheticGuide;
use crate::models::Options;
use crate::theme::Theme;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing JSON in {}", path.display()))
}

/// Load guide options from a JSON object file.
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<Options> {
    let path = path.as_ref();
    match read_json(path)? {
        Value::Object(map) => Ok(map),
        _ => bail!("{}: expected a JSON object of guide options", path.display()),
    }
}

/// Load theme parameters from a JSON object file.
pub fn load_theme<P: AsRef<Path>>(path: P) -> Result<Theme> {
    let path = path.as_ref();
    let value = read_json(path)?;
    Theme::try_from(value).with_context(|| format!("loading theme from {}", path.display()))
}

/// Save resolved guides as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(guides: &[AestheticGuide], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("writing {}", path.display()))?;
    let s = serde_json::to_string_pretty(guides)?;
    f.write_all(s.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn options_must_be_an_object() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("opts.json");
        std::fs::write(&p, "[1, 2, 3]").unwrap();
        assert!(load_options(&p).is_err());
        std::fs::write(&p, r#"{"reverse": true}"#).unwrap();
        assert_eq!(load_options(&p).unwrap()["reverse"], Value::Bool(true));
    }

    #[test]
    fn save_error_names_the_file() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("no_such_dir").join("out.json");
        let err = save_json(&[], &p).unwrap_err();
        assert!(format!("{:#}", err).contains("out.json"));
    }
}
