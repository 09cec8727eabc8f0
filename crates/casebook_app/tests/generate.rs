use std::io::Read;

use casebook_app::generate;
use casebook_core::CasebookConfig;

fn config_in(dir: &std::path::Path) -> CasebookConfig {
    CasebookConfig {
        output_dir: Some(dir.join("out")),
        ..Default::default()
    }
}

fn zip_entry(path: &std::path::Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn writes_all_three_documents() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let outputs = generate(&config).unwrap();

    assert_eq!(outputs.docx, tmp.path().join("out").join("True_Fruits_Case_Study.docx"));
    assert_eq!(outputs.pptx, tmp.path().join("out").join("True_Fruits_Presentation.pptx"));
    assert_eq!(outputs.pdf, tmp.path().join("out").join("True_Fruits_Case_Study_FINAL.pdf"));

    for path in [&outputs.docx, &outputs.pptx] {
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"PK"), "{} is not a zip package", path.display());
    }
    let pdf = std::fs::read(&outputs.pdf).unwrap();
    assert!(pdf.starts_with(b"%PDF-1.4"));
    assert!(pdf.ends_with(b"%%EOF\n"));
}

#[test]
fn docx_contains_write_up_tables() {
    let tmp = tempfile::tempdir().unwrap();
    let outputs = generate(&config_in(tmp.path())).unwrap();

    let xml = zip_entry(&outputs.docx, "word/document.xml");
    assert!(xml.contains("Porter"));
    assert!(xml.contains("Netherlands"));
    assert_eq!(xml.matches("<w:tbl>").count(), 3);
}

#[test]
fn pptx_has_eight_slides() {
    let tmp = tempfile::tempdir().unwrap();
    let outputs = generate(&config_in(tmp.path())).unwrap();

    let file = std::fs::File::open(&outputs.pptx).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let slides = archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    assert_eq!(slides, 8);

    let rankings = zip_entry(&outputs.pptx, "ppt/slides/slide5.xml");
    assert!(rankings.contains("Country Rankings"));
    assert!(rankings.contains("<a:tbl>"));
}

#[test]
fn regenerating_overwrites_in_place() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let first = generate(&config).unwrap();
    let size = std::fs::metadata(&first.pptx).unwrap().len();
    let second = generate(&config).unwrap();
    assert_eq!(std::fs::metadata(&second.pptx).unwrap().len(), size);
}

#[test]
fn output_dir_that_is_a_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("out");
    std::fs::write(&blocker, "not a directory").unwrap();

    assert!(generate(&config_in(tmp.path())).is_err());
}
