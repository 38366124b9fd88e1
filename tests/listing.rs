use crm_admin::domain::types::UserId;
use crm_admin::listing::{FilterValue, ListView};

mod common;

#[test]
fn six_records_with_page_size_five() {
    let mut view = ListView::new(common::six_users(), 5);

    assert_eq!(view.page_count(), 2);
    let first: Vec<i32> = view.current_page().iter().map(|u| u.id.get()).collect();
    assert_eq!(first, vec![1, 2, 3, 4, 5]);

    view.set_page(2);
    let second: Vec<i32> = view.current_page().iter().map(|u| u.id.get()).collect();
    assert_eq!(second, vec![6]);

    assert_eq!(view.set_page(3), 2);
}

#[test]
fn query_matches_sarah_in_any_case() {
    let mut view = ListView::new(common::six_users(), 5);

    for query in ["sarah", "SARAH", "  Sarah "] {
        view.set_query(query);
        let names: Vec<&str> = view.visible_records().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Johnson"], "query {query:?}");
    }
}

#[test]
fn query_also_searches_email() {
    let mut view = ListView::new(common::six_users(), 5);

    view.set_query("okafor@");

    assert_eq!(view.visible_count(), 1);
}

#[test]
fn deleting_record_six_clamps_to_page_one() {
    let mut view = ListView::new(common::six_users(), 5);
    view.set_page(2);

    view.remove(UserId::new(6).unwrap());

    assert_eq!(view.page_count(), 1);
    assert_eq!(view.page(), 1);
    assert_eq!(view.current_page().len(), 5);
}

#[test]
fn all_sentinel_disables_a_filter() {
    let mut view = ListView::new(common::six_users(), 5);

    view.set_filter("role", "admin");
    assert_eq!(view.visible_count(), 1);

    view.set_filter("role", FilterValue::All);
    assert_eq!(view.visible_count(), 6);

    view.set_filter("role", "");
    assert_eq!(view.visible_count(), 6);
}

#[test]
fn empty_result_still_has_one_page() {
    let mut view = ListView::new(common::six_users(), 5);
    view.set_page(2);

    view.set_query("nobody");

    assert_eq!(view.page_count(), 1);
    assert_eq!(view.page(), 1);
    assert!(view.current_page().is_empty());

    view.clear_filters();
    assert_eq!(view.visible_count(), 6);
    assert_eq!(view.page(), 1);
}

#[test]
fn page_links_collapse_for_long_lists() {
    let users: Vec<_> = (0..12)
        .flat_map(|_| common::six_users())
        .enumerate()
        .map(|(index, mut user)| {
            user.id = UserId::new(index as i32 + 1).unwrap();
            user
        })
        .collect();
    let mut view = ListView::new(users, 1);
    view.set_page(36);

    let page = view.paginated();

    assert_eq!(page.page_count, 72);
    assert_eq!(
        page.pages,
        vec![
            Some(1),
            Some(2),
            None,
            Some(34),
            Some(35),
            Some(36),
            Some(37),
            Some(38),
            None,
            Some(71),
            Some(72)
        ]
    );
    assert!(page.has_previous());
    assert!(page.has_next());
}
