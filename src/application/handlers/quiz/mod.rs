//! Quiz command and query handlers.

mod add_question;
mod create_quiz;
mod get_quiz;
mod list_quizzes;
mod submit_answers;

pub use add_question::{AddQuestionCommand, AddQuestionHandler};
pub use create_quiz::{CreateQuizCommand, CreateQuizHandler};
pub use get_quiz::{GetQuizHandler, GetQuizQuery};
pub use list_quizzes::ListQuizzesHandler;
pub use submit_answers::{SubmitAnswersCommand, SubmitAnswersHandler};
