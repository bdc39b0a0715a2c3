use std::env;

use bootline_model::{CLASS_PATH_FLAGS, PathSpec};

use crate::args::ArgsError;

/// Result of taking a leading `-cp <list>` off an argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassPathArgs {
    specs: Vec<PathSpec>,
    residual: Vec<String>,
}

impl ClassPathArgs {
    pub fn specs(&self) -> &[PathSpec] {
        &self.specs
    }

    pub fn residual(&self) -> &[String] {
        &self.residual
    }

    pub fn into_parts(self) -> (Vec<PathSpec>, Vec<String>) {
        (self.specs, self.residual)
    }
}

/// Recognise `-cp <list>` or `-classpath <list>` in first position.
///
/// The list is split on the platform path-list separator; empty entries are
/// skipped. Anything else leaves `args` untouched.
pub fn split_class_path(args: Vec<String>) -> Result<ClassPathArgs, ArgsError> {
    let Some(flag) = args.first().filter(|a| CLASS_PATH_FLAGS.contains(&a.as_str())) else {
        return Ok(ClassPathArgs {
            specs: Vec::new(),
            residual: args,
        });
    };
    let list = args
        .get(1)
        .ok_or_else(|| ArgsError::MissingValue(flag.clone()))?;

    let specs = env::split_paths(list)
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathSpec::new)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ClassPathArgs {
        specs,
        residual: args.into_iter().skip(2).collect(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn leading_flag_is_removed_with_its_value() {
        let list = env::join_paths([PathBuf::from("a.jar"), PathBuf::from("libs/*.jar")])
            .unwrap()
            .into_string()
            .unwrap();
        let out = split_class_path(vec!["-classpath".into(), list, "job.xml".into()]).unwrap();

        let paths: Vec<_> = out.specs().iter().map(|s| s.path().to_path_buf()).collect();
        assert_eq!(paths, vec![PathBuf::from("a.jar"), PathBuf::from("libs/*.jar")]);
        assert!(out.specs()[1].is_pattern());
        assert_eq!(out.residual(), ["job.xml"]);
    }

    #[test]
    fn no_flag_leaves_args_alone() {
        let out = split_class_path(strings(&["job.xml", "-cp", "x.jar"])).unwrap();
        assert!(out.specs().is_empty());
        assert_eq!(out.residual(), ["job.xml", "-cp", "x.jar"]);
    }

    #[test]
    fn flag_without_value_is_an_error() {
        let err = split_class_path(strings(&["-cp"])).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue(flag) if flag == "-cp"));
    }

    #[test]
    fn empty_entries_are_skipped() {
        let out = split_class_path(strings(&["-cp", ""])).unwrap();
        assert!(out.specs().is_empty());
        assert!(out.residual().is_empty());

        let single = split_class_path(strings(&["-cp", "one.jar"])).unwrap();
        assert_eq!(single.specs()[0].path(), Path::new("one.jar"));
    }
}
