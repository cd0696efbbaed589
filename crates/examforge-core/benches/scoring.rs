use criterion::{black_box, criterion_group, criterion_main, Criterion};

use examforge_core::exam::Exam;
use examforge_core::input::parse_bounded;
use examforge_core::mock::ScriptedConsole;
use examforge_core::model::{Answer, McqQuestion, TrueFalseQuestion};

fn make_exam(questions: usize) -> Exam {
    let exam = Exam::final_exam(120);
    for i in 0..questions {
        if i % 2 == 0 {
            exam.add_question(TrueFalseQuestion::new(format!("Q{i}"), "tf", 5, true));
        } else {
            let mut mcq = McqQuestion::new(format!("Q{i}"), "mcq", 10);
            mcq.set_choices(vec![
                Answer::new(1, "a"),
                Answer::new(2, "b"),
                Answer::new(3, "c"),
            ])
            .unwrap();
            mcq.set_correct_answer(i % 3).unwrap();
            exam.add_question(mcq);
        }
    }
    exam
}

fn bench_final_exam(c: &mut Criterion) {
    let exam = make_exam(50);
    let answers: Vec<String> = (0..50).map(|i| ((i % 2) + 1).to_string()).collect();

    c.bench_function("final_exam_50_questions", |b| {
        b.iter(|| {
            let mut console = ScriptedConsole::new(answers.iter().cloned());
            black_box(exam.take_exam(&mut console).unwrap())
        })
    });
}

fn bench_practical_reveal(c: &mut Criterion) {
    let exam = Exam::practical(60);
    for i in 0..50 {
        let mut mcq = McqQuestion::new(format!("Q{i}"), "mcq", 1);
        mcq.set_choices(vec![
            Answer::new(1, "a"),
            Answer::new(2, "b"),
            Answer::new(3, "c"),
        ])
        .unwrap();
        mcq.set_correct_answer(1).unwrap();
        exam.add_question(mcq);
    }

    c.bench_function("practical_reveal_50_questions", |b| {
        b.iter(|| {
            let mut console = ScriptedConsole::empty();
            black_box(exam.take_exam(&mut console).unwrap())
        })
    });
}

fn bench_parse_bounded(c: &mut Criterion) {
    let inputs = ["7", " 300 ", "abc", "-4", "99999999999"];
    c.bench_function("parse_bounded_mixed", |b| {
        b.iter(|| {
            for raw in &inputs {
                let _ = black_box(parse_bounded(black_box(raw), &(1..=300)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_final_exam,
    bench_practical_reveal,
    bench_parse_bounded
);
criterion_main!(benches);
