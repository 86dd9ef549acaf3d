//! Specs for `mediascan tags`.

use crate::prelude::*;

#[test]
fn prints_text_items_of_tagged_file() {
    let project = Project::empty();
    let file = project.tagged(
        "01.ape",
        &Tag::new().text("Title", "Song").text("Artist", "Band"),
    );

    mediascan_cmd()
        .args(["tags", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("  Title = Song\n")
                .and(predicates::str::contains("  Artist = Band\n")),
        );
}

#[test]
fn splits_multi_values() {
    let project = Project::empty();
    let file = project.tagged("01.ape", &Tag::new().text("Genre", "Rock\0Pop"));

    mediascan_cmd()
        .args(["tags", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Genre = Rock; Pop"));
}

#[test]
fn summarizes_binary_items() {
    let project = Project::empty();
    let file = project.tagged(
        "01.ape",
        &Tag::new().binary("Cover Art (Front)", &[0xDE, 0xAD, 0xBE, 0xEF]),
    );

    mediascan_cmd()
        .args(["tags", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Cover Art (Front) [binary, 4 bytes]"));
}

#[test]
fn all_values_prints_binary_as_hex() {
    let project = Project::empty();
    let file = project.tagged("01.ape", &Tag::new().binary("Blob", &[0xDE, 0xAD]));

    mediascan_cmd()
        .args(["tags", "--all-values", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Blob = dead"));
}

#[test]
fn config_values_all_prints_binary_as_hex() {
    let project = Project::empty();
    project.config("version = 1\n[tags]\nvalues = \"all\"\n");
    project.tagged("01.ape", &Tag::new().binary("Blob", &[0x01, 0x02]));

    mediascan_cmd()
        .args(["tags", "01.ape"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Blob = 0102"));
}

#[test]
fn untagged_file_exits_not_found() {
    let project = Project::empty();
    let file = project.file("plain.mp3", vec![0x55u8; 512]);

    mediascan_cmd()
        .args(["tags", file.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("plain.mp3: no tag"));
}

#[test]
fn missing_file_is_reported_as_untagged() {
    let project = Project::empty();

    mediascan_cmd()
        .args(["tags", "missing.ape"])
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("missing.ape: no tag"));
}

#[test]
fn one_untagged_file_among_many_exits_not_found() {
    let project = Project::empty();
    let tagged = project.tagged("a.ape", &Tag::new().text("Title", "A"));
    let plain = project.file("b.mp3", vec![0u8; 64]);

    mediascan_cmd()
        .args(["tags", tagged.to_str().unwrap(), plain.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(
            predicates::str::contains("Title = A").and(predicates::str::contains("b.mp3: no tag")),
        );
}

#[test]
fn json_output_lists_files() {
    let project = Project::empty();
    let file = project.tagged(
        "01.ape",
        &Tag::new().text("Title", "Song").binary("Blob", &[1, 2, 3]),
    );

    let output = mediascan_cmd()
        .args(["tags", "-o", "json", file.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output should be valid JSON");
    let tag = &json["files"][0]["tag"];
    assert_eq!(tag["declared"], 2);
    assert_eq!(tag["end"], "complete");
    assert_eq!(tag["items"][0]["key"], "Title");
    assert_eq!(tag["items"][0]["values"][0], "Song");
    assert_eq!(tag["items"][1]["kind"], "binary");
    assert_eq!(tag["items"][1]["size"], 3);
    assert!(tag["items"][1].get("hex").is_none());
}

#[test]
fn json_marks_untagged_file_null() {
    let project = Project::empty();
    let file = project.file("plain.mp3", vec![0u8; 64]);

    let output = mediascan_cmd()
        .args(["tags", "--output", "json", file.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["files"][0]["tag"].is_null());
}

#[test]
fn config_is_found_next_to_scanned_file() {
    let library = Project::empty();
    library.file(".git/HEAD", "");
    library.config("version = 1\n[tags]\nvalues = \"all\"\n");
    let file = library.tagged("Album/01.ape", &Tag::new().binary("Blob", &[0xab]));
    let elsewhere = Project::empty();

    mediascan_cmd()
        .args(["tags", file.to_str().unwrap()])
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Blob = ab"));
}
