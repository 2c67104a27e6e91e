//! Integration tests for the parsing module.
//!
//! Fixtures (.txt) and snapshots (.snap) are co-located in `fixtures/`.

use crate::parsing::{
    blocks::{Block, BlockKind, Member, group},
    node::Child,
    parse_document,
    rules::SyntaxKind,
    snapshot::{invariants, normalize::dump_blocks},
};

// Fixture-based snapshot tests

#[test]
fn fixture_header_paragraph() {
    assert_fixture("header_paragraph");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_table_row() {
    assert_fixture("table_row");
}

#[test]
fn fixture_inline_mix() {
    assert_fixture("inline_mix");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();

    let body = grouped(&text);
    let dump = dump_blocks(&body);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, dump);
    });
}

/// Parses and groups `text`, checking invariants on the way.
fn grouped(text: &str) -> Block {
    let doc = parse_document(text).unwrap();
    let root = doc.root.clone();
    let body = group(doc.root.children);
    invariants::check(&root, &body);
    body
}

fn top_kinds(body: &Block) -> Vec<Option<BlockKind>> {
    body.members
        .iter()
        .map(|m| match m {
            Member::Block(b) => Some(b.kind),
            Member::Child(_) => None,
        })
        .collect()
}

// Behaviour tests

#[test]
fn header_marker_mid_line_is_text() {
    let doc = parse_document("intro # not a header\n# header\n").unwrap();
    let kinds: Vec<_> = doc.root.children.iter().map(Child::kind).collect();
    assert_eq!(
        kinds,
        vec![None, Some(SyntaxKind::NewLine), Some(SyntaxKind::Header)]
    );
}

#[test]
fn final_line_terminator_is_not_a_node() {
    let doc = parse_document("x\n# Title\nHello *world*.\n").unwrap();
    let kinds: Vec<_> = doc.root.children.iter().map(Child::kind).collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(SyntaxKind::NewLine),
            Some(SyntaxKind::Header),
            None,
            Some(SyntaxKind::Emphasis),
            None
        ]
    );

    for ending in ["\r\n", "\r"] {
        let doc = parse_document(&format!("Hello{ending}")).unwrap();
        assert_eq!(doc.root.children, vec![Child::Text("Hello".into())]);
    }
}

#[test]
fn blank_line_at_end_stays_a_newline_run() {
    let doc = parse_document("a\n\n").unwrap();
    let newline = doc.root.children[1].as_node_of(SyntaxKind::NewLine).unwrap();
    assert_eq!(newline.run_length(), 2);
}

#[test]
fn header_at_document_start_is_recognised() {
    let doc = parse_document("# first").unwrap();
    assert_eq!(doc.root.children[0].kind(), Some(SyntaxKind::Header));
}

#[test]
fn items_across_one_blank_line_share_a_list() {
    let body = grouped("- a\n\n- b\n");
    let paragraph = body.blocks().next().unwrap();
    assert_eq!(paragraph.blocks().count(), 1);
}

#[test]
fn items_across_two_blank_lines_form_two_lists() {
    let body = grouped("- a\n\n\n- b\n");
    assert_eq!(
        top_kinds(&body),
        vec![Some(BlockKind::Paragraph), None, Some(BlockKind::Paragraph)]
    );
}

#[test]
fn crlf_and_cr_line_endings_are_equivalent_to_lf() {
    let lf = dump_blocks(&grouped("# T\n- a\n- b\n"));
    let crlf = dump_blocks(&grouped("# T\r\n- a\r\n- b\r\n"));
    let cr = dump_blocks(&grouped("# T\r- a\r- b\r"));
    let normalise = |s: &str| s.replace("\\r\\n", "\\n").replace("\\r", "\\n");
    assert_eq!(normalise(&crlf), lf);
    assert_eq!(normalise(&cr), lf);
}

#[test]
fn bibliography_swallows_the_rest_of_the_document() {
    let doc = parse_document("text\n====\n@a{b,\n  title={*x*}\n}\n").unwrap();
    let last = doc.root.children.last().unwrap();
    let bib = last.as_node_of(SyntaxKind::Bibliography).unwrap();
    assert_eq!(bib.text(), "\n@a{b,\n  title={*x*}\n}");
}

#[test]
fn divider_and_new_page_leave_their_line_end() {
    let doc = parse_document("----\n^^^^\nx").unwrap();
    let kinds: Vec<_> = doc.root.children.iter().map(Child::kind).collect();
    assert_eq!(
        kinds,
        vec![
            Some(SyntaxKind::Divider),
            Some(SyntaxKind::NewLine),
            Some(SyntaxKind::NewPage),
            Some(SyntaxKind::NewLine),
            None
        ]
    );
}

#[test]
fn subtext_counts_leading_spaces() {
    let doc = parse_document("   indented\n").unwrap();
    let sub = doc.root.children[0]
        .as_node_of(SyntaxKind::Subtext)
        .unwrap();
    assert_eq!(sub.run_length(), 3);
    assert_eq!(sub.text(), "indented");
}

#[test]
fn inline_code_keeps_markup_and_backslashes_raw() {
    let doc = parse_document(r"`*a* \n`").unwrap();
    let code = doc.root.children[0]
        .as_node_of(SyntaxKind::InlineCode)
        .unwrap();
    assert_eq!(code.children, vec![Child::Text(r"*a* \n".into())]);
}

#[test]
fn caption_line_is_recognised() {
    let doc = parse_document("{{plot.png}}\n~ A *plot*\n").unwrap();
    let kinds: Vec<_> = doc.root.children.iter().map(Child::kind).collect();
    assert_eq!(
        kinds,
        vec![
            Some(SyntaxKind::External),
            Some(SyntaxKind::NewLine),
            Some(SyntaxKind::Caption)
        ]
    );
}

#[test]
fn table_cells_may_contain_inline_markup() {
    let body = grouped("|*a*|b|\n");
    let table = body.blocks().next().unwrap();
    assert_eq!(table.kind, BlockKind::Table);
    let row = table.blocks().next().unwrap();
    let first = row.children().next().unwrap();
    let cell = first.as_node_of(SyntaxKind::TableCell).unwrap();
    assert_eq!(cell.children[0].kind(), Some(SyntaxKind::Emphasis));
}

#[test]
fn paragraph_text_before_a_table_ends_the_paragraph() {
    let body = grouped("intro\n|a|\n");
    assert_eq!(
        top_kinds(&body),
        vec![Some(BlockKind::Paragraph), Some(BlockKind::Table)]
    );
}
