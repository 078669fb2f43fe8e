//! Course detection against a dictionary of known course names.

use crate::models::{Detected, ExtractionRule};

/// Finds the first known course name appearing anywhere in the text,
/// case-insensitively. "First" means earliest position in the document;
/// when two dictionary entries start at the same offset the longer one
/// wins ("Social Studies" over "Social").
pub fn extract_course(text: &str, known_courses: &[String]) -> Option<Detected<String>> {
    let haystack = text.to_lowercase();
    let mut best: Option<(usize, &String)> = None;

    for course in known_courses {
        let needle = course.to_lowercase();
        if needle.is_empty() {
            continue;
        }
        let Some(pos) = haystack.find(&needle) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((best_pos, best_course)) => {
                pos < best_pos || (pos == best_pos && course.len() > best_course.len())
            },
        };
        if better {
            best = Some((pos, course));
        }
    }

    best.map(|(_, course)| Detected::new(course.clone(), ExtractionRule::CourseDictionary))
}
