use std::fmt;
use std::sync::OnceLock;

const CATALOG_DATA: &str = include_str!("../assets/security_questions.tsv");

#[cfg(test)]
const EXPECTED_SHA256: &str = "27c60a945ad1a628d01dcb5334cc97df5f81b5793bfef92fc836484b0aa63517";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Personal,
    Family,
    Preferences,
    Memory,
    Location,
}

pub const CATEGORIES: [Category; 5] = [
    Category::Personal,
    Category::Family,
    Category::Preferences,
    Category::Memory,
    Category::Location,
];

impl Category {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "personal" => Some(Category::Personal),
            "family" => Some(Category::Family),
            "preferences" => Some(Category::Preferences),
            "memory" => Some(Category::Memory),
            "location" => Some(Category::Location),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Personal => "Personal",
            Category::Family => "Family",
            Category::Preferences => "Preferences",
            Category::Memory => "Memories",
            Category::Location => "Places",
        };
        f.write_str(label)
    }
}

pub struct Question {
    pub id: &'static str,
    pub category: Category,
    pub text: &'static str,
    pub placeholder: &'static str,
}

static CATALOG: OnceLock<Vec<Question>> = OnceLock::new();

pub fn get_catalog() -> &'static [Question] {
    CATALOG.get_or_init(|| {
        let questions: Vec<Question> = CATALOG_DATA
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let mut fields = line.split('\t');
                let id = fields.next()?;
                let category = Category::parse(fields.next()?)?;
                let text = fields.next()?;
                let placeholder = fields.next()?;
                Some(Question {
                    id,
                    category,
                    text,
                    placeholder,
                })
            })
            .collect();

        assert_eq!(
            questions.len(),
            catalog_size(),
            "Question catalog must contain exactly {} entries",
            catalog_size()
        );
        questions
    })
}

pub const fn catalog_size() -> usize {
    26
}

pub fn question_by_id(id: &str) -> Option<&'static Question> {
    get_catalog().iter().find(|q| q.id == id)
}

pub fn questions_in_category(category: Category) -> impl Iterator<Item = &'static Question> {
    get_catalog().iter().filter(move |q| q.category == category)
}
