//! Pure core of the search pipeline: name filtering and pagination over
//! the full in-memory record set returned by the directory endpoint.

use crate::directory::Person;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Case-insensitive substring filter on the name field. An empty term
/// matches everything.
pub fn filter_by_name(people: &[Person], term: &str) -> Vec<Person> {
    let needle = term.to_lowercase();
    people
        .iter()
        .filter(|person| person.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Number of pages the filtered set spans. Zero means no results, in which
/// case no page is valid and both navigation controls are disabled.
pub fn total_pages(filtered_count: usize) -> usize {
    filtered_count.div_ceil(PAGE_SIZE)
}

/// The slice of the filtered set shown on a 1-indexed page. A page past
/// the end yields an empty slice.
pub fn page_slice(filtered: &[Person], page: usize) -> Vec<Person> {
    let start = (page - 1) * PAGE_SIZE;
    filtered.iter().skip(start).take(PAGE_SIZE).cloned().collect()
}

/// Sequential number shown in the first table column.
pub fn row_number(page: usize, index: usize) -> usize {
    (page - 1) * PAGE_SIZE + index + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: u64, name: &str) -> Person {
        Person {
            id,
            name: name.to_string(),
            email: format!("{}@x.com", id),
        }
    }

    fn roster(count: u64) -> Vec<Person> {
        (1..=count).map(|i| person(i, &format!("user {}", i))).collect()
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let people = vec![person(1, "Alice"), person(2, "Bob")];
        let filtered = filter_by_name(&people, "");
        assert_eq!(filtered, people);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let people = vec![person(1, "Alice"), person(2, "Bob"), person(3, "alicia")];
        let filtered = filter_by_name(&people, "ALI");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Alice");
        assert_eq!(filtered[1].name, "alicia");
    }

    #[test]
    fn test_no_match_yields_empty_set_and_zero_pages() {
        let people = vec![person(1, "Alice"), person(2, "Bob")];
        let filtered = filter_by_name(&people, "zzz-no-match");
        assert!(filtered.is_empty());
        assert_eq!(total_pages(filtered.len()), 0);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn test_two_records_fit_on_one_page() {
        let people = vec![person(1, "Alice"), person(2, "Bob")];
        let filtered = filter_by_name(&people, "");
        assert_eq!(total_pages(filtered.len()), 1);
        assert_eq!(page_slice(&filtered, 1), filtered);
    }

    #[test]
    fn test_twenty_five_records_span_three_pages() {
        let people = roster(25);
        assert_eq!(total_pages(people.len()), 3);
        assert_eq!(page_slice(&people, 1).len(), 10);
        assert_eq!(page_slice(&people, 2).len(), 10);

        let last = page_slice(&people, 3);
        assert_eq!(last.len(), 5);
        assert_eq!(last[0].id, 21);
        assert_eq!(last[4].id, 25);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let people = roster(5);
        assert!(page_slice(&people, 2).is_empty());
    }

    #[test]
    fn test_row_numbering_continues_across_pages() {
        assert_eq!(row_number(1, 0), 1);
        assert_eq!(row_number(1, 9), 10);
        assert_eq!(row_number(2, 0), 11);
        assert_eq!(row_number(3, 4), 25);
    }
}
