//! Tier 2: Filter pipeline

use proptest::prelude::*;
use wewin::samples::{sample_accounts, sample_tickets};
use wewin::{
    Account, FieldMatch, Filter, PageRequest, Record, TabPredicate, Ticket, TicketStatus,
};

fn tickets() -> Vec<Ticket> {
    sample_tickets("Upendra V")
}

fn presales() -> TabPredicate<Ticket> {
    TabPredicate::new("Department Tickets", |t: &Ticket| t.departments == "Presales")
}

#[test]
fn test_identity_filter_keeps_order() {
    let records = tickets();
    let filter = Filter::<Ticket>::new();
    let out: Vec<Ticket> = filter.apply(&records).into_iter().cloned().collect();
    assert_eq!(out, records);
}

fn mine() -> TabPredicate<Ticket> {
    TabPredicate::new("My Tickets", |t: &Ticket| t.assign_to == "Upendra V")
}

fn tab_strategy() -> impl Strategy<Value = Option<usize>> {
    prop::option::of(0usize..2)
}

fn tab_at(index: usize) -> TabPredicate<Ticket> {
    if index == 0 {
        presales()
    } else {
        mine()
    }
}

#[test]
fn test_combined_stages_example() {
    let records = tickets();
    let all = Filter::new()
        .with_tab(presales())
        .with_field("status", FieldMatch::Exact("Resolved".into()))
        .with_search("phone");
    let hits: Vec<String> = all.apply(&records).iter().map(|t| t.key.to_string()).collect();
    assert_eq!(hits, vec!["8"]);
}

#[test]
fn test_search_covers_every_field_and_key() {
    let records = sample_accounts();
    let by_email = Filter::<Account>::new().with_search("YAHOO");
    assert_eq!(by_email.apply(&records).len(), 1);

    let by_phone = Filter::<Account>::new().with_search("45269");
    assert_eq!(by_phone.apply(&records)[0].account_name, "Harsh Jain");

    let by_key = Filter::<Account>::new().with_search("5");
    // key "5" plus any value containing a 5
    assert!(by_key.apply(&records).iter().any(|a| a.key == "5"));
}

#[test]
fn test_blank_predicates_are_inactive() {
    let records = tickets();
    let filter = Filter::new()
        .with_field("assignTo", FieldMatch::Contains(String::new()))
        .with_search("");
    assert!(filter.is_identity());
    assert_eq!(filter.apply(&records).len(), records.len());
}

#[test]
fn test_page_beyond_range_is_empty() {
    let records = tickets();
    let filtered = Filter::<Ticket>::new().apply(&records);
    let page = PageRequest::new(3, 5).slice(&filtered);
    assert!(page.is_empty());
    assert_eq!(page.total(), 8);
}

proptest! {
    #[test]
    fn prop_stages_are_conjunctive(
        tab in tab_strategy(),
        status in prop::option::of(prop::sample::select(TicketStatus::LABELS)),
        assignee in "[a-z]{0,2}",
        term in "[a-z]{0,2}",
    ) {
        let records = tickets();

        let mut all = Filter::<Ticket>::new()
            .with_field("assignTo", FieldMatch::Contains(assignee.clone()))
            .with_search(term.as_str());
        let mut stages: Vec<Filter<Ticket>> = vec![
            Filter::new().with_field("assignTo", FieldMatch::Contains(assignee)),
            Filter::new().with_search(term.as_str()),
        ];
        if let Some(index) = tab {
            all = all.with_tab(tab_at(index));
            stages.push(Filter::new().with_tab(tab_at(index)));
        }
        if let Some(status) = status {
            all = all.with_field("status", FieldMatch::Exact(status.to_string()));
            stages.push(Filter::new().with_field("status", FieldMatch::Exact(status.to_string())));
        }

        for t in &records {
            let expected = stages.iter().all(|stage| stage.matches(t));
            prop_assert_eq!(all.matches(t), expected, "ticket {}", t.key);
        }

        let kept: Vec<&Ticket> = records.iter().filter(|t| all.matches(t)).collect();
        prop_assert_eq!(all.apply(&records), kept);
    }

    #[test]
    fn prop_page_is_bounded_and_in_order(page in 1usize..6, size in 1usize..10, term in "[a-z]{0,2}") {
        let records = tickets();
        let filtered = Filter::<Ticket>::new().with_search(term.as_str()).apply(&records);
        let slice = PageRequest::new(page, size).slice(&filtered);

        prop_assert!(slice.len() <= size);
        prop_assert_eq!(slice.total(), filtered.len());
        let offset = (page - 1) * size;
        for (i, t) in slice.items().iter().enumerate() {
            prop_assert_eq!(t, filtered[offset + i]);
        }
    }

    #[test]
    fn prop_pages_reassemble_filtered_list(size in 1usize..10, term in "[a-z]{0,2}") {
        let records = tickets();
        let filtered = Filter::<Ticket>::new().with_search(term.as_str()).apply(&records);
        let request = PageRequest::first(size);
        let mut joined = Vec::new();
        for p in 1..=request.page_count(filtered.len()) {
            joined.extend(request.with_page(p).slice(&filtered).into_items());
        }
        let expected: Vec<Ticket> = filtered.into_iter().cloned().collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn prop_search_only_narrows(term in "[a-zA-Z]{0,3}") {
        let records = tickets();
        let filter = Filter::<Ticket>::new().with_search(term.as_str());
        let out = filter.apply(&records);
        prop_assert!(out.len() <= records.len());
        let lower = term.to_lowercase();
        for t in out {
            prop_assert!(t.search_values().iter().any(|v| v.to_lowercase().contains(&lower)));
        }
    }
}
