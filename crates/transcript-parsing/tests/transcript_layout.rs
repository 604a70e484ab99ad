//! End-to-end parsing of layout-preserved transcript text.
//!
//! The fixture mirrors what `pdftotext -layout` produces for a two-page
//! academic transcript: a component table split across pages by a form
//! feed, followed by the course-load summary.

use transcript_parsing::verdict::load_complete;
use transcript_parsing::{
    LoadRow, ParsingConfigBuilder, ParsingError, TranscriptParser, extract_load_table,
    scan_enrollment,
};

const TRANSCRIPT: &str = "\
                          UNIVERSIDADE FEDERAL
                          HISTÓRICO ESCOLAR

Nome: FULANA DE TAL                                   Matrícula: 2020012345
Curso: CIÊNCIA DA COMPUTAÇÃO - BACHARELADO            Status: ATIVO

Componentes Curriculares Cursados/Cursando
Ano/Período  Componente Curricular                 CH     Turma  Freq %  Nota  Situação
2023.1       MAT0101 CÁLCULO DIFERENCIAL I         90 h   01     100,0   8,5   APROVADO
2023.2       MAT0102 CÁLCULO DIFERENCIAL II        90 h   01      95,0   7,0   APROVADO
2024.1       DIM0110 ESTRUTURAS DE DADOS           60 h   02       --     --   MATRICULADO
\u{0C}2024.1       DIM0120 BANCO DE DADOS                60 h   01       --     --   MATRICULADO
2024.2       DIM0130 COMPILADORES                  60 h   01       --     --   MATRICULADO

Legenda: APR - Aprovado, MATR - Matriculado, REP - Reprovado

Carga Horária Integralizada/Pendente
                 Obrigatórias    Optativos    Extensão    Complementares    Total
   Exigido          2400 h         360 h        320 h         120 h        3200 h
   Integralizado    1800 h         240 h        100 h          60 h        2200 h
   Pendente          600 h         120 h        220 h          60 h        1000 h
";

#[test]
fn load_table_matches_parsed_integers() {
    let table = extract_load_table(TRANSCRIPT).unwrap();
    assert_eq!(
        table.required,
        LoadRow::from_values(&[2400, 360, 320, 120, 3200]).unwrap()
    );
    assert_eq!(
        table.completed,
        LoadRow::from_values(&[1800, 240, 100, 60, 2200]).unwrap()
    );
    assert_eq!(
        table.pending,
        LoadRow::from_values(&[600, 120, 220, 60, 1000]).unwrap()
    );
    assert!(!load_complete(&table));
}

#[test]
fn missing_header_is_section_not_found_regardless_of_rows() {
    let text = TRANSCRIPT.replace("Carga Horária Integralizada/Pendente", "Carga Horária");
    let err = extract_load_table(&text).unwrap_err();
    assert_eq!(
        err,
        ParsingError::SectionNotFound("Carga Horária Integralizada/Pendente".into())
    );
}

#[test]
fn short_row_is_row_format_unexpected() {
    // Drop the completed row's total column.
    let text = TRANSCRIPT.replace("2200 h", "");
    let err = extract_load_table(&text).unwrap_err();
    match err {
        ParsingError::RowFormatUnexpected(line) => assert!(line.starts_with("Integralizado")),
        other => panic!("expected RowFormatUnexpected, got {other:?}"),
    }
}

#[test]
fn extraction_is_idempotent() {
    let parser = TranscriptParser::new();
    assert_eq!(
        parser.assess(TRANSCRIPT).unwrap(),
        parser.assess(TRANSCRIPT).unwrap()
    );
    assert_eq!(scan_enrollment(TRANSCRIPT), scan_enrollment(TRANSCRIPT));
}

#[test]
fn enrollment_scan_across_page_break() {
    let scan = scan_enrollment(TRANSCRIPT);
    assert_eq!(scan.periods, vec!["2024.1", "2024.2"]);
    // Three component lines plus the legend line mention the keyword.
    assert_eq!(scan.count, 4);
}

#[test]
fn enrollment_scan_minimal_example() {
    let text = "\
2023.2  MAT0101  APROVADO
2024.1  MAT0102  MATRICULADO
2024.2  MAT0103  MATRICULADO
";
    let scan = scan_enrollment(text);
    assert_eq!(scan.periods, vec!["2024.1", "2024.2"]);
    assert_eq!(scan.count, 2);
}

#[test]
fn checker_and_table_agree_on_pending_total() {
    let parser = TranscriptParser::new();
    let table = parser.load_table(TRANSCRIPT).unwrap();
    assert_eq!(parser.pending_total(TRANSCRIPT).unwrap(), table.pending.total);
    assert!(!parser.has_completed_load(TRANSCRIPT).unwrap());
    assert!(parser.is_enrolled(TRANSCRIPT));
}

#[test]
fn checker_accepts_rows_the_table_rejects() {
    let text = "Carga Horária Integralizada/Pendente\n\
                Exigido 3200 h\n\
                Integralizado 3200 h\n\
                Pendente 0 h\n";
    let parser = TranscriptParser::new();
    assert!(matches!(
        parser.load_table(text),
        Err(ParsingError::RowFormatUnexpected(_))
    ));
    assert!(parser.has_completed_load(text).unwrap());
}

#[test]
fn completed_transcript_verdict() {
    let text = "\
Carga Horária Integralizada/Pendente
   Exigido          2400 h   360 h   320 h   120 h   3200 h
   Integralizado    2400 h   400 h   320 h   120 h   3240 h
   Pendente            0 h     0 h     0 h     0 h      0 h
2019.1  MAT0101  APROVADO
";
    let assessment = TranscriptParser::new().assess(text).unwrap();
    assert!(assessment.verdict.load_complete);
    assert!(!assessment.verdict.is_enrolled);
    assert_eq!(assessment.enrollment.count, 0);
}

#[test]
fn custom_vocabulary() {
    let config = ParsingConfigBuilder::new()
        .section_header("Workload Summary")
        .required_label("Required")
        .completed_label("Completed")
        .pending_label("Pending")
        .enrollment_keyword("enrolled")
        .build()
        .unwrap();
    let text = "\
Workload Summary
  Required   100 h  0 h  0 h  0 h  100 h
  Completed  100 h  0 h  0 h  0 h  100 h
  Pending      0 h  0 h  0 h  0 h    0 h
2025.1  CS101  ENROLLED
";
    let assessment = TranscriptParser::with_config(config).assess(text).unwrap();
    assert!(assessment.verdict.load_complete);
    assert_eq!(assessment.enrollment.periods, vec!["2025.1"]);
}

#[test]
fn assessment_serializes_to_json() {
    let assessment = TranscriptParser::new().assess(TRANSCRIPT).unwrap();
    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["load"]["pending"]["total"], 1000);
    assert_eq!(json["enrollment"]["count"], 4);
    assert_eq!(json["verdict"]["is_enrolled"], true);
    assert_eq!(json["verdict"]["load_complete"], false);
}
