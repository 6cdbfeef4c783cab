#![allow(dead_code)]

use trivia_api::db::Store;
use trivia_api::domain::CategoryId;
use trivia_api::models::NewQuestion;

pub const CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// (question, answer, difficulty, category)
pub const QUESTIONS: [(&str, &str, i32, i32); 14] = [
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    ("Which Dutch graphic artist initials M C was a creator of optical illusions?", "Escher", 1, 2),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
    ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
];

pub fn temp_database_url(prefix: &str) -> String {
    let path = std::env::temp_dir().join(format!("{prefix}-{}.db", uuid::Uuid::new_v4()));
    format!("sqlite:{}", path.display())
}

pub async fn seed(store: &Store) {
    for (id, category_type) in CATEGORIES {
        store
            .add_category(CategoryId::new(id), category_type)
            .await
            .expect("failed to seed category");
    }

    for (question, answer, difficulty, category) in QUESTIONS {
        store
            .add_question(&NewQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                difficulty,
                category: CategoryId::new(category),
            })
            .await
            .expect("failed to seed question");
    }
}
