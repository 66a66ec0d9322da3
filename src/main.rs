fn main() {
    if let Err(e) = exam_tickets::run() {
        eprintln!("exam-tickets fatal: {e:#}");
        std::process::exit(1);
    }
}
