use criterion::{Criterion, criterion_group, criterion_main};
use txt2html_engine::{convert, parse_document};

/// A document touching every construct, repeated `sections` times.
fn generate_document(sections: usize) -> String {
    let mut doc = String::new();
    for i in 0..sections {
        doc.push_str(&format!("# Section {i}\n"));
        doc.push_str("Some *italic*, **bold** and {blue}coloured{blue} text with $x^2$ math.\n");
        doc.push_str("A footnote ((with *nested* markup)) and a reference [[key2020]].\n");
        doc.push_str("See @@Section 0@@ or @{the site}{https://example.org}@.\n\n");
        doc.push_str("- first item\n- second item\n\n1) one\n2) two\n\n");
        doc.push_str("|a|b|c|\n|1|2|3|\n\n");
        doc.push_str("%% a comment\n  indented subtext\n----\n\n");
    }
    doc.push_str("====\n@article{key2020, title={T}}\n");
    doc
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.sample_size(10);

    let content = generate_document(50);
    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(doc);
        });
    });
    group.bench_function("convert", |b| {
        b.iter(|| {
            let html = convert(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_conversion);
criterion_main!(benches);
