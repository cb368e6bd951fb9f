use std::thread;

use sandcalc::{evaluate_expression, interpreter::value::core::Value};

fn expressions() -> Vec<String> {
    (0..64).map(|i| match i % 4 {
               0 => format!("{i}! // {}", i + 1),
               1 => format!("sqrt({}) + {i} % 7", i * i),
               2 => format!("log(10 ** {i}) - round({i} / 3, 2)"),
               _ => format!("({i} - 100) // 3 * pi"),
           })
           .collect()
}

#[test]
fn concurrent_evaluations_match_sequential_ones() {
    let sources = expressions();
    let sequential = sources.iter()
                            .map(|src| evaluate_expression(src).map_err(|e| e.to_string()))
                            .collect::<Vec<_>>();

    let concurrent = thread::scope(|scope| {
        let handles = sources.iter()
                             .map(|src| {
                                 scope.spawn(move || evaluate_expression(src).map_err(|e| e.to_string()))
                             })
                             .collect::<Vec<_>>();

        handles.into_iter()
               .map(|handle| handle.join().expect("evaluation thread panicked"))
               .collect::<Vec<_>>()
    });

    assert_eq!(concurrent, sequential);
    assert!(sequential.iter().all(Result::is_ok));
}

#[test]
fn failures_do_not_leak_between_threads() {
    thread::scope(|scope| {
        let failing = scope.spawn(|| {
                               (0..200).filter(|_| evaluate_expression("fact(2001)").is_err())
                                       .count()
                           });
        let passing = scope.spawn(|| {
                               (0..200).filter(|_| {
                                           evaluate_expression("fact(5)").ok() == Some(Value::from(120))
                                       })
                                       .count()
                           });

        assert_eq!(failing.join().expect("thread panicked"), 200);
        assert_eq!(passing.join().expect("thread panicked"), 200);
    });
}
