//! # Routes
//!
//! Maps sidebar entries to pages. Only the array pages are implemented; every
//! other path lands on a placeholder.
//!
//! | Path | Page |
//! |------|------|
//! | `/` | Home |
//! | `/arrays` | Array operations visualizer |
//! | `/arrays/editor` | Array editor |
//! | anything else | Placeholder |

use std::fmt;

pub const DATA_STRUCTURES: [&str; 7] = [
    "Array",
    "Linked List",
    "Stack",
    "Queue",
    "Binary Tree",
    "Hash Table",
    "Graph",
];

pub const ALGORITHMS: [&str; 5] = [
    "Bubble Sort",
    "Merge Sort",
    "Quick Sort",
    "Binary Search",
    "Dijkstra's Algorithm",
];

pub const EXPLORE_ITEMS: [&str; 4] = [
    "Data Structures",
    "Algorithms",
    "Tutorials",
    "Complexity Analysis",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    ArrayOperations,
    ArrayEditor,
    /// A known link without a page yet.
    Placeholder(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim();
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match normalized {
            "/" => Route::Home,
            "/arrays" => Route::ArrayOperations,
            "/arrays/editor" => Route::ArrayEditor,
            other if other.starts_with('/') => Route::Placeholder(other.to_string()),
            other => Route::Placeholder(format!("/{other}")),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::ArrayOperations => "/arrays",
            Route::ArrayEditor => "/arrays/editor",
            Route::Placeholder(path) => path,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Route::Home => "Welcome",
            Route::ArrayOperations => "Array Operations",
            Route::ArrayEditor => "Array Visualization",
            Route::Placeholder(_) => "Coming Soon",
        }
    }

    /// Whether this route renders an array page.
    pub fn is_array_page(&self) -> bool {
        matches!(self, Route::ArrayOperations | Route::ArrayEditor)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Link target of a data structure entry: lowercased, first space turned
/// into a dash, pluralized (`"Linked List"` -> `/linked-lists`).
pub fn structure_path(name: &str) -> String {
    format!("/{}s", name.to_lowercase().replacen(' ', "-", 1))
}

/// Link target of an algorithm entry (`"Bubble Sort"` -> `/bubble-sort`).
pub fn algorithm_path(name: &str) -> String {
    format!("/{}", name.to_lowercase().replacen(' ', "-", 1))
}

/// Every path the explorer knows about, in sidebar order.
pub fn known_paths() -> Vec<String> {
    let mut paths = vec!["/".to_string()];
    paths.extend(DATA_STRUCTURES.iter().map(|name| structure_path(name)));
    paths.push(Route::ArrayEditor.path().to_string());
    paths.extend(ALGORITHMS.iter().map(|name| algorithm_path(name)));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_paths() {
        assert_eq!(structure_path("Array"), "/arrays");
        assert_eq!(structure_path("Linked List"), "/linked-lists");
        assert_eq!(structure_path("Binary Tree"), "/binary-trees");
    }

    #[test]
    fn test_algorithm_paths() {
        assert_eq!(algorithm_path("Bubble Sort"), "/bubble-sort");
        assert_eq!(
            algorithm_path("Dijkstra's Algorithm"),
            "/dijkstra's-algorithm"
        );
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/arrays"), Route::ArrayOperations);
        assert_eq!(Route::from_path("/arrays/"), Route::ArrayOperations);
        assert_eq!(Route::from_path("/arrays/editor"), Route::ArrayEditor);
        assert_eq!(
            Route::from_path("/stacks"),
            Route::Placeholder("/stacks".to_string())
        );
        assert_eq!(
            Route::from_path("queues"),
            Route::Placeholder("/queues".to_string())
        );
    }

    #[test]
    fn test_path_round_trips() {
        for path in known_paths() {
            assert_eq!(Route::from_path(&path).path(), path);
        }
    }

    #[test]
    fn test_only_arrays_have_pages() {
        let pages: Vec<Route> = DATA_STRUCTURES
            .iter()
            .map(|name| Route::from_path(&structure_path(name)))
            .filter(|route| !matches!(route, Route::Placeholder(_)))
            .collect();
        assert_eq!(pages, vec![Route::ArrayOperations]);
    }
}
