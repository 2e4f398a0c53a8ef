mod common;

use std::fs;

use common::normalizer;
use pt_text_clean::{
    process_file, process_files, AdapterError, DocumentKind, ProcessOptions, Stage,
};

#[test]
fn writes_final_stage_with_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doril.v2.txt");
    fs::write(&input, "<b>Olá, vc viu isso?</b> http://x.co 😀\n").unwrap();
    let out_dir = dir.path().join("processados").join("lote");

    let written = process_file(&input, &out_dir, &normalizer(), ProcessOptions::default()).unwrap();

    assert_eq!(written.output_path, out_dir.join("doril_processado.txt"));
    assert!(written.trace_path.is_none());
    let saved = fs::read_to_string(&written.output_path).unwrap();
    assert_eq!(saved, "olá você ver isso\n");
}

#[test]
fn optional_trace_file_lists_every_stage_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("jornal.txt");
    fs::write(&input, "Tenho 10 casas").unwrap();
    let options = ProcessOptions {
        kind: DocumentKind::Social,
        write_trace: true,
    };

    let written = process_file(&input, dir.path(), &normalizer(), options).unwrap();

    let trace_path = written.trace_path.expect("trace requested");
    assert_eq!(trace_path, dir.path().join("jornal_etapas.json"));
    let json = fs::read_to_string(trace_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 13);
    assert_eq!(object[Stage::SpellOutNumerals.label()], "Tenho dez casas");

    let mut last = 0;
    for stage in Stage::ALL {
        let at = json.find(stage.label()).unwrap();
        assert!(at >= last, "{} out of order", stage.label());
        last = at;
    }
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nao_existe.txt");
    let out_dir = dir.path().join("out");

    let err = process_file(&input, &out_dir, &normalizer(), ProcessOptions::default()).unwrap_err();

    assert!(matches!(err, AdapterError::NotFound(ref p) if *p == input));
    assert!(err.to_string().starts_with("Erro: Arquivo não encontrado em"));
    assert!(!out_dir.exists());
}

#[test]
fn batch_keeps_going_past_missing_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("doril.txt");
    let missing = dir.path().join("no14011801.txt");
    fs::write(&present, "vc viu 10 casas").unwrap();
    let out_dir = dir.path().join("processados");

    let report = process_files(
        &[missing.clone(), present.clone()],
        &out_dir,
        &normalizer(),
        ProcessOptions::default(),
    );

    assert!(!report.is_success());
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].0, missing);
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, missing.as_path());
    assert!(matches!(failures[0].1, AdapterError::NotFound(_)));

    let saved = fs::read_to_string(out_dir.join("doril_processado.txt")).unwrap();
    assert_eq!(saved, "você ver dez casa\n");
}

#[test]
fn batch_of_present_inputs_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.txt");
    fs::write(&input, "casa").unwrap();

    let report = process_files(&[&input], dir.path(), &normalizer(), ProcessOptions::default());

    assert!(report.is_success());
    assert_eq!(report.failures().count(), 0);
}
