use super::navigation::Tab;
use crate::todo::Todo;

/// Returns, in collection order, the records on `tab` that contain `query`
/// (case-insensitively) in their title, description or id.
///
pub fn visible_todos<'a>(todos: &'a [Todo], tab: Tab, query: &str) -> Vec<&'a Todo> {
    todos
        .iter()
        .filter(|todo| todo.completed == tab.shows_completed())
        .filter(|todo| todo.matches(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::initial_todos;
    use fake::{Fake, Faker};

    fn titles(todos: Vec<&Todo>) -> Vec<&str> {
        todos.into_iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn bills_on_active_tab() {
        let todos = initial_todos();
        let result = visible_todos(&todos, Tab::Active, "bills");
        assert_eq!(vec!["Pay Utility Bills"], titles(result));
    }

    #[test]
    fn empty_query_keeps_order() {
        let todos = initial_todos();
        let result = visible_todos(&todos, Tab::Active, "");
        assert_eq!(5, result.len());
        assert_eq!("Grocery Shopping", result[0].title);
        assert_eq!("Book Appointment", result[4].title);
    }

    #[test]
    fn completed_tab_empty_for_seed() {
        let todos = initial_todos();
        assert!(visible_todos(&todos, Tab::Completed, "").is_empty());
    }

    #[test]
    fn query_is_case_insensitive() {
        let todos = initial_todos();
        let result = visible_todos(&todos, Tab::Active, "CAR WASH");
        assert_eq!(vec!["Car Wash"], titles(result));
    }

    #[test]
    fn query_matches_id() {
        let todos = initial_todos();
        let result = visible_todos(&todos, Tab::Active, "1700445605");
        assert_eq!(vec!["Book Appointment"], titles(result));
    }

    #[test]
    fn query_matches_description() {
        let todos = initial_todos();
        let result = visible_todos(&todos, Tab::Active, "peterson");
        assert_eq!(vec!["Book Appointment"], titles(result));
    }

    #[test]
    fn no_match() {
        let todos = initial_todos();
        assert!(visible_todos(&todos, Tab::Active, "zebra").is_empty());
    }

    #[test]
    fn result_is_exactly_the_matching_records() {
        let todos: Vec<Todo> = (0..200).map(|_| Faker.fake()).collect();
        for tab in [Tab::Active, Tab::Completed] {
            for query in ["", "a", "E", "1", "qu"] {
                let result = visible_todos(&todos, tab, query);
                let expected: Vec<&Todo> = todos
                    .iter()
                    .filter(|t| t.completed == (tab == Tab::Completed))
                    .filter(|t| {
                        let q = query.to_lowercase();
                        t.title.to_lowercase().contains(&q)
                            || t.description.to_lowercase().contains(&q)
                            || t.id.to_string().contains(&q)
                    })
                    .collect();
                assert_eq!(expected, result);
            }
        }
    }
}
