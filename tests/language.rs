use std::{cell::RefCell, fs, rc::Rc};

use borno::{Interpreter, RunError, RuntimeError, run_source};
use walkdir::WalkDir;

/// Runs a program with captured output, returning what it printed.
fn run_program(source: &str) -> Result<String, RunError> {
    let buffer: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
    let mut interpreter = Interpreter::with_output(buffer.clone());

    run_source(source, &mut interpreter, false)?;

    let output = String::from_utf8(buffer.borrow().clone()).expect("output is valid UTF-8");
    Ok(output)
}

fn assert_output(source: &str, expected: &str) {
    match run_program(source) {
        Ok(output) => assert_eq!(output, expected, "wrong output for:\n{source}"),
        Err(e) => panic!("Script failed: {e}\nScript: {source}"),
    }
}

fn compile_errors(source: &str) -> Vec<borno::ParseError> {
    match run_program(source) {
        Err(RunError::Compile(errors)) => errors,
        Err(RunError::Runtime(e)) => {
            panic!("Script hit a runtime error instead of a compile error: {e}\nScript: {source}")
        },
        Ok(_) => panic!("Script compiled but was expected to fail: {source}"),
    }
}

fn runtime_error(source: &str) -> RuntimeError {
    match run_program(source) {
        Err(RunError::Runtime(error)) => error,
        Err(RunError::Compile(errors)) => {
            panic!("Script failed to compile: {errors:?}\nScript: {source}")
        },
        Ok(_) => panic!("Script succeeded but was expected to fail: {source}"),
    }
}

#[test]
fn arithmetic_with_bengali_digits() {
    assert_output("দেখাও ১০ + ২০;", "30\n");
    assert_output("দেখাও ৪২.৫;", "42.5\n");
    assert_output("দেখাও (১ + ২) * ৩;", "9\n");
    assert_output("দেখাও -৫ + ১০;", "5\n");
    assert_output("দেখাও ৭ % ৩;", "1\n");
    assert_output("দেখাও ৭.৫ % ২;", "1.5\n");
}

#[test]
fn mixed_ascii_and_bengali_digits_fold_identically() {
    assert_output("দেখাও ১২৩ == 123;", "true\n");
    assert_output("দেখাও ৪২.৫ == 42.5;", "true\n");
}

#[test]
fn exponentiation_is_right_associative() {
    assert_output("দেখাও ২ ** ১০;", "1024\n");
    assert_output("দেখাও 2 ** 3 ** 2;", "512\n");
}

#[test]
fn string_concatenation() {
    assert_output("দেখাও \"মান: \" + ৫;", "মান: 5\n");
    assert_output("দেখাও ১ + \" টি\";", "1 টি\n");
    assert_output("দেখাও \"ক\" + \"খ\";", "কখ\n");
}

#[test]
fn conditionals() {
    assert_output("ধরি x = ১৫; যদি (x > ১০) { দেখাও \"বেশি\"; } নাহয় { দেখাও \"কম\"; }",
                  "বেশি\n");
    assert_output("ধরি x = ৫; যদি (x > ১০) { দেখাও \"বেশি\"; } নাহয় { দেখাও \"কম\"; }",
                  "কম\n");
}

#[test]
fn truthiness() {
    assert_output("যদি (\"\") { দেখাও 1; } নাহয় { দেখাও 2; }", "2\n");
    assert_output("যদি (০) { দেখাও 1; } নাহয় { দেখাও 2; }", "2\n");
    assert_output("যদি ([]) { দেখাও 1; } নাহয় { দেখাও 2; }", "1\n");
    assert_output("দেখাও !সত্য;", "false\n");
    assert_output("দেখাও !!\"ক\";", "true\n");
    assert_output("দেখাও !nil;", "true\n");
}

#[test]
fn logical_operators_return_operands() {
    assert_output("দেখাও মিথ্যা || \"ডান\";", "ডান\n");
    assert_output("দেখাও 0 && 5;", "0\n");
    assert_output("দেখাও ১ এবং ২;", "2\n");
    assert_output("দেখাও nil বা \"বিকল্প\";", "বিকল্প\n");
}

#[test]
fn equality() {
    assert_output("দেখাও nil == nil;", "true\n");
    assert_output("দেখাও (১ & ১) == ১;", "true\n");
    assert_output("দেখাও \"ক\" == \"ক\";", "true\n");
    assert_output("দেখাও ১ != ২;", "true\n");
    assert_output("দেখাও [১] == [১];", "false\n");
    assert_output("ধরি a = [১]; ধরি b = a; দেখাও a == b;", "true\n");
}

#[test]
fn bitwise_operators() {
    assert_output("দেখাও ৫ & ৩;", "1\n");
    assert_output("দেখাও ৫ | ৩;", "7\n");
    assert_output("দেখাও ৫ ^ ৩;", "6\n");
    assert_output("দেখাও ১ << ৪;", "16\n");
    assert_output("দেখাও ১৬ >> ২;", "4\n");
    assert_output("দেখাও ~০;", "-1\n");
    // A float with zero fraction counts as an integer.
    assert_output("দেখাও ৬.০ & ৩;", "2\n");
}

#[test]
fn variables_and_shadowing() {
    assert_output("ধরি a = 1, b = 2; দেখাও a + b;", "3\n");
    assert_output("ধরি x = 1; { ধরি x = 2; দেখাও x; } দেখাও x;", "2\n1\n");
    assert_output("ধরি x; দেখাও x;", "nil\n");
}

#[test]
fn redeclaration_in_same_scope_is_an_error() {
    let error = runtime_error("ধরি x = 1; ধরি x = 2;");
    assert_eq!(error.message(), "Cannot redeclare variable x.");
}

#[test]
fn assignment_to_undeclared_is_an_error() {
    let error = runtime_error("y = 5;");
    assert_eq!(error.message(), "Undefined variable 'y'.");
}

#[test]
fn undefined_variable_read_is_an_error() {
    let error = runtime_error("ধরি a = 1;\nদেখাও b;");
    assert_eq!(error.to_string(), "Variable b is not defined.\n[line 2]");
}

#[test]
fn arrays_share_storage_between_bindings() {
    assert_output("ধরি a = [১০, ২০, ৩০]; a[২] = ৩০০; দেখাও a[২];", "300\n");
    assert_output("ধরি a = [1, 2]; ধরি b = a; b[0] = 9; দেখাও a[0];", "9\n");
}

#[test]
fn array_index_errors() {
    let error = runtime_error("ধরি a = [১]; দেখাও a[৫];");
    assert_eq!(error.message(), "Array index out of bounds.");

    let error = runtime_error("ধরি a = [১]; দেখাও a[০.৫];");
    assert_eq!(error.message(), "Array index must be an integer.");

    let error = runtime_error("ধরি a = ৫; দেখাও a[০];");
    assert_eq!(error.message(), "Invalid array access. Not an array.");
}

#[test]
fn objects() {
    assert_output("ধরি p = {নাম: \"মিতা\", মান: ৩০}; দেখাও p.নাম;", "মিতা\n");
    assert_output("ধরি p = {মান: ৩০}; p.মান = ৩১; দেখাও p.মান;", "31\n");
    // Property assignment creates the key if absent.
    assert_output("ধরি p = {}; p.নতুন = ১; দেখাও p.নতুন;", "1\n");
    // A duplicate key keeps the last-written value.
    assert_output("ধরি p = {k: 1, k: 2}; দেখাও p.k;", "2\n");
}

#[test]
fn missing_property_is_an_error() {
    let error = runtime_error("ধরি p = {ক: ১}; দেখাও p.x;");
    assert_eq!(error.message(), "Property 'x' does not exist on object '{ক: 1}'.");

    let error = runtime_error("ধরি p = {}; দেখাও p.x;");
    assert_eq!(error.message(), "Property 'x' does not exist on object '{}'.");
}

#[test]
fn closures_capture_their_declaration_environment() {
    assert_output("ফাংশন মিটার() { ধরি n = 0;\n\
                   ফাংশন inc() { n = n + 1; ফেরত n; }\n\
                   ফেরত inc; }\n\
                   ধরি c = মিটার(); দেখাও c(); দেখাও c(); দেখাও c();",
                  "1\n2\n3\n");
}

#[test]
fn recursion_through_the_call_frame_binding() {
    assert_output("ফাংশন ফিব(n) { যদি (n < 2) { ফেরত n; } ফেরত ফিব(n - 1) + ফিব(n - 2); }\n\
                   দেখাও ফিব(10);",
                  "55\n");
}

#[test]
fn for_loop_with_break_and_continue() {
    assert_output("ফর (ধরি i = 0; i < 5; i = i + 1) { \
                   যদি (i == 2) { চালিয়ে_যাও; } \
                   যদি (i == 4) { থামো; } \
                   দেখাও i; }",
                  "0\n1\n3\n");
}

#[test]
fn break_only_exits_the_nearest_loop() {
    assert_output("ফর (ধরি i = 0; i < 2; i = i + 1) { \
                   ফর (ধরি j = 0; j < 5; j = j + 1) { \
                   যদি (j == 1) { থামো; } দেখাও j; } }",
                  "0\n0\n");
}

#[test]
fn consecutive_for_loops_can_reuse_the_initializer_name() {
    assert_output("ফর (ধরি i = 0; i < 1; i = i + 1) { দেখাও i; } \
                   ফর (ধরি i = 5; i < 6; i = i + 1) { দেখাও i; }",
                  "0\n5\n");
}

#[test]
fn while_loop_propagates_return() {
    assert_output("ফাংশন f() { যতক্ষণ (সত্য) { ফেরত 7; } } দেখাও f();", "7\n");
}

#[test]
fn while_loop_counts() {
    assert_output("ধরি i = ০; যতক্ষণ (i < ৩) { দেখাও i; i = i + ১; }", "0\n1\n2\n");
}

#[test]
fn control_flow_outside_containers_is_an_error() {
    assert_eq!(runtime_error("থামো;").message(), "Unexpected 'break' outside of loop.");
    assert_eq!(runtime_error("চালিয়ে_যাও;").message(),
               "Unexpected 'continue' outside of loop.");
    assert_eq!(runtime_error("ফেরত ১;").message(),
               "Unexpected 'return' outside of function.");
}

#[test]
fn call_errors() {
    let error = runtime_error("ফাংশন f(a, b) { ফেরত a; } f(1);");
    assert_eq!(error.message(), "Expected 2 arguments but 1.");

    let error = runtime_error("ধরি x = 5; x();");
    assert_eq!(error.message(), "Can only call functions.");
}

#[test]
fn function_without_return_yields_nil() {
    assert_output("ফাংশন f() { } দেখাও f();", "nil\n");
    assert_output("ফাংশন f() { ফেরত; } দেখাও f();", "nil\n");
}

#[test]
fn division_by_zero() {
    let error = runtime_error("দেখাও ১০ / ০;");
    assert_eq!(error.to_string(), "Division by zero.\n[line 1]");

    let error = runtime_error("দেখাও ১০ % ০;");
    assert_eq!(error.message(), "Division by zero.");
}

#[test]
fn operator_type_errors_name_the_offending_side() {
    assert_eq!(runtime_error("দেখাও \"ক\" < ১;").message(),
               "Left operand must be a number.");
    assert_eq!(runtime_error("দেখাও ১ * \"ক\";").message(),
               "Right operand must be a number.");
    assert_eq!(runtime_error("দেখাও ১.৫ & ১;").message(),
               "Left operand must be an integer.");
    assert_eq!(runtime_error("দেখাও ১ & ১.৫;").message(),
               "Right operand must be an integer.");
    assert_eq!(runtime_error("দেখাও \"ক\" + সত্য;").message(),
               "Right operand must be a string or number.");
    assert_eq!(runtime_error("দেখাও সত্য + সত্য;").message(),
               "Operands must be numbers or strings.");
    assert_eq!(runtime_error("দেখাও -\"ক\";").message(), "Operand must be a number.");
    assert_eq!(runtime_error("দেখাও ~১.৫;").message(), "Operand must be an integer.");
}

#[test]
fn array_builtins() {
    assert_output("দেখাও লেন([১, ২, ৩]);", "3\n");
    assert_output("ধরি a = [1]; ধরি b = এড(a, 2, 3); দেখাও লেন(b); দেখাও লেন(a);",
                  "3\n1\n");
    assert_output("দেখাও রিমুভ([১০, ২০, ৩০], ১);", "[10, 30]\n");

    let error = runtime_error("দেখাও লেন(৫);");
    assert_eq!(error.message(), "Function call failed: লেন function only works on arrays");

    let error = runtime_error("লেন(1, 2);");
    assert_eq!(error.message(), "Expected 1 arguments but 2.");
}

#[test]
fn object_builtins() {
    assert_output("দেখাও অব্জেক্ট_কি({b: 1, a: 2});", "[a, b]\n");
    assert_output("দেখাও অব্জেক্ট_মান({b: 1, a: 2});", "[2, 1]\n");
    assert_output("ধরি p = {a: 1, b: 2}; কি_রিমুভ(p, \"a\"); দেখাও অব্জেক্ট_কি(p);",
                  "[b]\n");

    let error = runtime_error("কি_রিমুভ({}, \"x\");");
    assert_eq!(error.message(), "Function call failed: key 'x' not found in object");
}

#[test]
fn math_builtins() {
    assert_output("দেখাও পরমমান(-৫);", "5\n");
    assert_output("দেখাও বর্গমূল(৯);", "3\n");
    assert_output("দেখাও ঘাত(২, ৮);", "256\n");
    assert_output("দেখাও সাইন(০);", "0\n");
    assert_output("দেখাও কসাইন(০);", "1\n");
    assert_output("দেখাও ট্যান(০);", "0\n");
    assert_output("দেখাও রাউন্ড(২.৫);", "3\n");
    assert_output("দেখাও রাউন্ড(-২.৫);", "-3\n");
    assert_output("দেখাও সর্বনিম্ন([৩, ১, ২]);", "1\n");
    assert_output("দেখাও সর্বোচ্চ(৪, ৭);", "7\n");
}

#[test]
fn clock_advances() {
    assert_output("দেখাও ক্লক() > ০;", "true\n");
}

#[test]
fn reserved_identifiers_cannot_be_declared() {
    compile_errors("ধরি লেন = 5;");
    compile_errors("ধরি input = 1;");
    compile_errors("ধরি ইনপুট = 1;");
    compile_errors("ফাংশন ক্লক() { }");
}

#[test]
fn missing_semicolon_before_newline() {
    let errors = compile_errors("ধরি x = 5\nদেখাও x;");
    assert!(errors[0].to_string().contains("Expect ';' before newline."),
            "got: {errors:?}");
}

#[test]
fn array_and_object_initializers_may_span_lines() {
    assert_output("ধরি a = [১,\n২];\nদেখাও লেন(a);", "2\n");
    assert_output("ধরি p = {ক: ১,\nখ: ২};\nদেখাও p.ক;", "1\n");
}

#[test]
fn invalid_assignment_targets() {
    let errors = compile_errors("1 = 2;");
    assert!(errors[0].to_string().contains("Invalid assignment target."),
            "got: {errors:?}");

    let errors = compile_errors("ধরি a = 1; (a) = 2;");
    assert!(errors[0].to_string().contains("Invalid assignment target."),
            "got: {errors:?}");
}

#[test]
fn lexical_errors_are_all_reported() {
    let errors = compile_errors("@\n#\n");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].to_string(), "[line 1] Error: Unexpected character.");
    assert_eq!(errors[1].to_string(), "[line 2] Error: Unexpected character.");

    let errors = compile_errors("দেখাও \"খোলা;");
    assert_eq!(errors[0].to_string(), "[line 1] Error: Unterminated string.");

    let errors = compile_errors("/* খোলা\nমন্তব্য");
    assert_eq!(errors[0].to_string(), "[line 2] Error: Unterminated multiline comment");
}

#[test]
fn comments_are_skipped() {
    assert_output("// মন্তব্য\nদেখাও ১; /* ব্লক\nমন্তব্য */ দেখাও ২;", "1\n2\n");
}

#[test]
fn strings_may_span_lines() {
    assert_output("দেখাও \"এক\nদুই\";", "এক\nদুই\n");
}

#[test]
fn keywords_do_not_swallow_longer_identifiers() {
    assert_output("ধরি ফরম = ১; দেখাও ফরম;", "1\n");
    assert_output("ধরি printer = ২; দেখাও printer;", "2\n");
}

#[test]
fn parse_error_names_the_lexeme() {
    let errors = compile_errors("দেখাও ১");
    assert_eq!(errors[0].to_string(), "[line 1] Error at end: Expect ';' after value.");

    let errors = compile_errors("যদি ১) { }");
    assert!(errors[0].to_string().starts_with("[line 1] Error at '1':"),
            "got: {errors:?}");
}

#[test]
fn repl_mode_echoes_expression_statements() {
    let buffer: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
    let mut interpreter = Interpreter::with_output(buffer.clone());

    run_source("১ + ১;", &mut interpreter, true).expect("expression runs");
    run_source("ধরি x = ৫;", &mut interpreter, true).expect("declaration runs");
    run_source("x * ২;", &mut interpreter, true).expect("variable persists");

    let output = String::from_utf8(buffer.borrow().clone()).expect("valid UTF-8");
    assert_eq!(output, "2\n10\n");
}

#[test]
fn token_lines_are_monotonic() {
    let (tokens, errors) = borno::interpreter::lexer::scan("ধরি a = ১;\nধরি b = ২;\n\nদেখাও a + b;");
    assert!(errors.is_empty());

    let mut previous = 0;
    for (_, line) in &tokens {
        assert!(*line >= previous, "line numbers went backwards");
        previous = *line;
    }
    assert_eq!(previous, 4);
}

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "bn")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_program(&source) {
            panic!("Demo script {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
