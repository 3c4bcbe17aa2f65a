use crate::{Benefit, BenefitType, CachePartition};

use googletest::prelude::*;

fn benefit(id: &str) -> Benefit {
    Benefit {
        id: id.to_string(),
        title: format!("Benefit {id}"),
        description: String::new(),
        benefit_type: BenefitType::Social,
        target_groups: vec![],
        regions: vec!["all".to_string()],
        valid_from: "2024-01-01".to_string(),
        valid_to: None,
        requirements: vec![],
        steps: vec![],
        documents: vec![],
        partner: None,
        category_id: None,
        tags: vec![],
        merchant_name: None,
        merchant_url: None,
        locations: vec![],
        amount: None,
        savings_per_month: None,
        is_new: false,
        expires_in: None,
    }
}

#[test]
fn given_empty_partition_when_toggled_then_id_hidden() {
    let mut partition = CachePartition::default();

    let hidden = partition.toggle_hidden("b-1");

    assert_that!(hidden, eq(true));
    assert_eq!(partition.hidden_benefit_ids, vec!["b-1".to_string()]);
}

#[test]
fn given_hidden_id_when_toggled_then_removed_and_others_kept() {
    let mut partition = CachePartition {
        hidden_benefit_ids: vec!["b-1".into(), "b-2".into(), "b-3".into()],
        ..Default::default()
    };

    let hidden = partition.toggle_hidden("b-2");

    assert_that!(hidden, eq(false));
    assert_eq!(
        partition.hidden_benefit_ids,
        vec!["b-1".to_string(), "b-3".to_string()]
    );
}

#[test]
fn given_hidden_benefits_when_listing_shown_then_hidden_are_skipped() {
    let mut partition = CachePartition {
        benefits: vec![benefit("b-1"), benefit("b-2")],
        ..Default::default()
    };
    partition.toggle_hidden("b-1");

    let shown: Vec<&str> = partition
        .shown_benefits()
        .map(|benefit| benefit.id.as_str())
        .collect();

    assert_eq!(shown, vec!["b-2"]);
}

