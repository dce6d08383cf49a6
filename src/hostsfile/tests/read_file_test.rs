// hostsfile/tests/read_file_test.rs

use hostsfile::{read, reads, HostsError, Result};
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"# personal machines, no section
laptop = me@192.168.1.10

[DEFAULT]
; shown in every group
bastion! = ops@jump.example.com # always go through here

[work]
db -> replica   = root@10.0.0.3 # read only
web!            = deploy,www@10.0.0.1 # front end
db              = root,admin@10.0.0.2
db -> replica -> disk = root@10.0.0.4

[lab]
pi = pi@10.9.0.2
"#;

fn names(entries: &[hostsfile::HostEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn read_sample_from_disk() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(SAMPLE.as_bytes())?;

    let catalog = read(file.path())?;

    let groups: Vec<_> = catalog.group_names().collect();
    assert_eq!(groups, vec!["DEFAULT", "_global", "work", "lab"]);

    let work = catalog.get_group("work").unwrap();
    assert_eq!(names(work), vec!["web", "db", "replica", "disk", "bastion"]);

    let web = &work[0];
    assert!(web.critical);
    assert_eq!(web.users, vec!["deploy", "www"]);
    assert_eq!(web.comment, "front end");

    let disk = &work[3];
    assert_eq!(disk.parent.as_deref(), Some("replica"));
    assert_eq!(disk.depth, 2);

    assert_eq!(names(catalog.get_group("_global").unwrap()), vec!["laptop", "bastion"]);
    assert_eq!(catalog.entry_count(), 1 + 2 + 5 + 2);
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read(dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, HostsError::Io(_)));
    assert!(err.to_string().contains("absent"));
}

#[test]
fn reserved_groups_only_when_non_empty() -> Result<()> {
    let catalog = reads("[DEFAULT]\n[servers]\nweb = a@b\n")?;
    assert!(!catalog.has_group("DEFAULT"));
    assert!(!catalog.has_group("_global"));
    assert!(catalog.has_group("servers"));
    Ok(())
}

#[test]
fn reparsing_rendered_catalog_keeps_order() -> Result<()> {
    let catalog = reads("[work]\nweb = a@h1 # x\nweb->api = b@h2\ndb = c@h3\n")?;
    let rendered = catalog.to_string();
    let again = reads(&rendered)?;
    assert_eq!(again, catalog);
    Ok(())
}

#[test]
fn reparsing_rendered_catalog_keeps_deep_hierarchy() -> Result<()> {
    let catalog = reads("[w]\na = u@h\na->b = u@h\na->b->c = u@h\nz = u@h\n")?;
    let rendered = catalog.to_string();
    assert!(rendered.contains("_->b->c = u@h"));

    let again = reads(&rendered)?;
    let c = &again.get_group("w").unwrap()[2];
    assert_eq!(c.depth, 2);
    assert_eq!(c.parent.as_deref(), Some("b"));
    assert_eq!(again, catalog);
    Ok(())
}

#[test]
fn reparsing_rendered_catalog_keeps_top_of_file_entries() -> Result<()> {
    let catalog = reads("top = u@h\n[w]\na = u@h\n")?;
    let rendered = catalog.to_string();
    assert!(rendered.starts_with("top = u@h\n"));
    assert!(!rendered.contains("[_global]"));

    assert_eq!(reads(&rendered)?, catalog);
    assert_eq!(reads(&reads(SAMPLE)?.to_string())?, reads(SAMPLE)?);
    Ok(())
}

#[test]
fn failure_returns_no_partial_result() {
    let input = "[good]\na = u@h\n[bad]\nchild->orphan = u@h\n";
    match reads(input) {
        Err(HostsError::OrphanReference { parent, child }) => {
            assert_eq!(parent, "child");
            assert_eq!(child, "orphan");
        }
        other => panic!("expected orphan error, got {:?}", other),
    }
}
