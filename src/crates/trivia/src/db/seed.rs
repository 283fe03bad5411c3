//! Starter data for an empty database

use crate::db::{
    connection::DatabaseConnection,
    error::DbResult,
    models::NewQuestion,
    repositories::{CategoryRepository, QuestionRepository},
};

/// Category labels inserted by [`seed_defaults`], in id order
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, category index into [`DEFAULT_CATEGORIES`], difficulty)
const SAMPLE_QUESTIONS: &[(&str, &str, usize, i64)] = &[
    ("What is the heaviest organ in the human body?", "The Liver", 0, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 0, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 0, 4),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 1, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 1, 3),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 2, 3),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 3, 2),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 3, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 4),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 5, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 5, 4),
];

/// Insert the default categories and sample questions into an empty database
///
/// Does nothing when at least one category already exists.
///
/// # Returns
/// `true` if data was inserted
pub async fn seed_defaults(db: &DatabaseConnection) -> DbResult<bool> {
    let pool = db.pool();
    if CategoryRepository::count(pool).await? > 0 {
        tracing::debug!("Categories already present, skipping seed");
        return Ok(false);
    }

    let mut ids = Vec::with_capacity(DEFAULT_CATEGORIES.len());
    for kind in DEFAULT_CATEGORIES {
        ids.push(CategoryRepository::create(pool, kind).await?.id);
    }

    for &(question, answer, category, difficulty) in SAMPLE_QUESTIONS {
        let new = NewQuestion::new(question, answer, ids[category], difficulty);
        QuestionRepository::create(pool, &new).await?;
    }

    tracing::info!(
        "Seeded {} categories and {} questions",
        ids.len(),
        SAMPLE_QUESTIONS.len()
    );
    Ok(true)
}
