// PDF text assembly and per-document counting
mod common;

use common::{keywords, text_pdf};
use kwdensity::counter::count_document;
use kwdensity::pdf_extraction::{assemble_text, load_pdf, page_texts};

#[test]
fn pages_are_joined_in_order() {
    let pdf = text_pdf(&["doanh thu tang", "loi nhuan giam", "tang truong"]);
    let text = assemble_text(&pdf).unwrap();

    let first = text.find("doanh").unwrap();
    let second = text.find("loi").unwrap();
    let third = text.find("truong").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn pages_are_separated_by_one_space() {
    let pdf = text_pdf(&["doanh", "thu"]);
    assert_eq!(assemble_text(&pdf).unwrap(), "doanh thu");
}

#[test]
fn phrase_spanning_a_page_break_is_counted() {
    let pdf = text_pdf(&["tang doanh", "thu nam nay"]);
    let result = count_document(&pdf, &keywords(&["doanh thu"])).unwrap();
    assert_eq!(result.counts["doanh thu"], 1);
    assert_eq!(result.total_words, 5);
}

#[test]
fn pages_without_text_contribute_nothing() {
    let pdf = text_pdf(&["alpha beta", "", "gamma"]);
    let document = load_pdf(&pdf).unwrap();

    let texts = page_texts(&document).unwrap();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts, vec!["alpha beta", "gamma"]);
    assert_eq!(assemble_text(&pdf).unwrap(), "alpha beta gamma");
}

#[test]
fn document_with_no_text_counts_zero() {
    let pdf = text_pdf(&["", ""]);
    let result = count_document(&pdf, &keywords(&["a"])).unwrap();
    assert_eq!(result.total_words, 0);
    assert_eq!(result.counts["a"], 0);
    assert_eq!(result.percents["a"], 0.0);
}

#[test]
fn counts_across_pages() {
    let pdf = text_pdf(&["Doanh thu tang, doanhthu giam", "DOANH THU on dinh"]);
    let result = count_document(&pdf, &keywords(&["doanh thu", "thu", "tang"])).unwrap();

    assert_eq!(result.total_words, 9);
    assert_eq!(result.counts["doanh thu"], 2);
    assert_eq!(result.counts["thu"], 2);
    assert_eq!(result.counts["tang"], 1);
    assert_eq!(result.percents["tang"], 11.1111);
}

#[test]
fn header_without_body_is_an_error() {
    let err = count_document(b"%PDF-1.7\n", &keywords(&["text"])).unwrap_err();
    assert!(err.to_string().starts_with("PDF error"));
}
