use super::*;

#[test]
fn every_section_has_a_distinct_title() {
    let titles: Vec<_> = DashboardSection::ALL.into_iter().map(section_title).collect();
    for (i, title) in titles.iter().enumerate() {
        assert!(!title.is_empty());
        assert!(!titles[i + 1..].contains(title), "duplicate title {title}");
    }
}

#[test]
fn quests_carry_positive_xp() {
    assert!(!QUESTS.is_empty());
    assert!(QUESTS.iter().all(|&(title, xp)| !title.is_empty() && xp > 0));
}
