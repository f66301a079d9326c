use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::AppendError;
use crate::record::Record;

pub const DATA_DIR: &str = "data";
pub const DATA_FILE: &str = "dados_c.txt";

/// Append `record` as one line to `<dir>/dados_c.txt`, creating `dir` if needed.
/// Existing content is never truncated.
pub fn append_record(dir: &Path, record: &Record) -> Result<PathBuf, AppendError> {
    let path = dir.join(DATA_FILE);

    let open = |path: &Path| OpenOptions::new().create(true).append(true).open(path);

    let mut file = match open(&path) {
        Ok(file) => file,
        Err(_) => {
            fs::create_dir_all(dir).map_err(|source| AppendError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
            open(&path).map_err(|source| AppendError::Open {
                path: path.clone(),
                source,
            })?
        }
    };

    write_record(&mut file, &path, record)?;

    Ok(path)
}

fn write_record<W: Write>(out: &mut W, path: &Path, record: &Record) -> Result<(), AppendError> {
    writeln!(out, "{}", record.to_append_line())
        .and_then(|_| out.flush())
        .map_err(|source| AppendError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn creates_directory_on_first_use() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join(DATA_DIR);
        assert!(!dir.exists());

        let path = append_record(&dir, &Record::new("Ana", "5B", "9.5")).unwrap();

        assert_eq!(path, dir.join(DATA_FILE));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Nome: Ana | Turma: 5B | Nota: 9.5\n");
    }

    #[test]
    fn appends_instead_of_overwriting() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join(DATA_DIR);
        let record = Record::new("Ana", "5B", "9.5");

        let path = append_record(&dir, &record).unwrap();
        let first_len = fs::metadata(&path).unwrap().len();
        append_record(&dir, &record).unwrap();
        let second_len = fs::metadata(&path).unwrap().len();

        assert_eq!(second_len, first_len * 2);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.lines().all(|l| l == "Nome: Ana | Turma: 5B | Nota: 9.5"));
    }

    #[test]
    fn file_in_place_of_directory_is_reported() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join(DATA_DIR);
        fs::write(&blocker, b"").unwrap();

        let err = append_record(&blocker, &Record::new("Ana", "5B", "9.5")).unwrap_err();

        match &err {
            AppendError::CreateDir { path, .. } => assert_eq!(path, &blocker),
            other => panic!("expected a create-dir error, got {other:?}"),
        }
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Failed to create directory"));
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_is_exit_code_three() {
        let path = Path::new("data").join(DATA_FILE);

        let err = write_record(&mut FullDisk, &path, &Record::new("Ana", "5B", "9.5")).unwrap_err();

        assert!(matches!(err, AppendError::Write { .. }));
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("no space left on device"));
    }
}
