//! Consistency check: the compiled-in template list matches `templates/`
//!
//! Adding or removing a file under `templates/` without updating the
//! built-in list fails here.

use std::path::Path;

use pybootstrap::templates::{output_filename, TemplateSet, BUILTIN};

fn templates_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

#[test]
fn test_builtin_list_matches_directory() {
    let scanned = TemplateSet::scan(templates_dir()).expect("templates/ should be readable");
    let builtin = TemplateSet::builtin();

    let mut scanned_ids: Vec<_> = scanned.iter().map(|t| t.id.clone()).collect();
    let mut builtin_ids: Vec<_> = builtin.iter().map(|t| t.id.clone()).collect();
    scanned_ids.sort();
    builtin_ids.sort();
    assert_eq!(scanned_ids, builtin_ids);

    for template in builtin.iter() {
        let on_disk = scanned.get(&template.id).unwrap();
        assert_eq!(
            on_disk.body, template.body,
            "embedded body of {} is stale",
            template.id
        );
    }
}

#[test]
fn test_builtin_entries_are_templates() {
    for entry in BUILTIN {
        assert!(
            output_filename(entry.file_name).is_some(),
            "{} lacks the template suffix",
            entry.file_name
        );
        assert!(!entry.destination.is_empty());
    }
}

#[test]
fn test_builtin_templates_parse() {
    pybootstrap::render::Renderer::new(&TemplateSet::builtin())
        .expect("every built-in template should parse");
}
