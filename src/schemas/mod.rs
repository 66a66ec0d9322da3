pub mod exam_question;
pub mod ticket;
