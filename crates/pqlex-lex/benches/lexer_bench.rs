//! Benchmarks for the line lexer and the full from-text-to-snapshot path.
//! Run with: `cargo bench --package pqlex-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pqlex_lex::{LexerSnapshot, LexerState};

fn snapshot_token_count(source: &str) -> usize {
    let state = LexerState::from_text(source);
    LexerSnapshot::try_from(&state)
        .map(|s| s.tokens.len())
        .unwrap_or(0)
}

fn bench_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_expressions");

    let short = "let x = 42 in x + 1";
    group.throughput(Throughput::Bytes(short.len() as u64));
    group.bench_function("let_in_expression", |b| {
        b.iter(|| snapshot_token_count(black_box(short)))
    });

    let query = r#"
        let
            Source = Table.FromRecords({[a = 1, b = 2]}),
            #"Added Index" = Table.AddIndexColumn(Source, "Index"),
            #"Filtered Rows" = Table.SelectRows(#"Added Index", each [a] > 0)
        in
            #"Filtered Rows"
    "#;
    group.throughput(Throughput::Bytes(query.len() as u64));
    group.bench_function("query_with_quoted_identifiers", |b| {
        b.iter(|| snapshot_token_count(black_box(query)))
    });

    group.finish();
}

fn bench_comments_and_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_comments_and_strings");

    let multiline_comment = "/* this is\na comment\nspanning several\nlines */ 1";
    group.bench_function("multiline_comment", |b| {
        b.iter(|| snapshot_token_count(black_box(multiline_comment)))
    });

    let long_string =
        "\"This is a longer text literal used for benchmarking the stitcher's allocation cost.\"";
    group.bench_function("long_text_literal", |b| {
        b.iter(|| snapshot_token_count(black_box(long_string)))
    });

    group.finish();
}

fn bench_incremental_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_incremental");

    let document: String = (0..200)
        .map(|i| format!("let x{i} = {i} in x{i} + 1;\n"))
        .collect();

    group.bench_function("full_relex", |b| {
        b.iter(|| snapshot_token_count(black_box(&document)))
    });

    group.bench_function("single_line_edit_cascade", |b| {
        let mut state = LexerState::from_text(&document);
        b.iter(|| {
            state.update_line(100, black_box("let x100 = 999 in x100 + 2;".to_string()));
            LexerSnapshot::try_from(&state).unwrap().tokens.len()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_expressions,
    bench_comments_and_strings,
    bench_incremental_edit
);
criterion_main!(benches);
