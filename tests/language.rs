use std::fs;

use monkey::{
    error::InterpretError,
    interpret,
    interpreter::{
        environment::Environment,
        lexer::{Token, tokenize},
        parser::core::Parser,
        value::core::Value,
    },
};
use walkdir::WalkDir;

fn eval(source: &str) -> Result<Value, InterpretError> {
    interpret(source, &Environment::new())
}

fn assert_value(source: &str, expected: &Value) {
    match eval(source) {
        Ok(value) => assert_eq!(&value, expected, "wrong result for {source:?}"),
        Err(error) => panic!("evaluation of {source:?} failed: {error}"),
    }
}

fn assert_integer(source: &str, expected: i64) {
    assert_value(source, &Value::from(expected));
}

fn assert_boolean(source: &str, expected: bool) {
    assert_value(source, &Value::from(expected));
}

fn assert_nil(source: &str) {
    assert_value(source, &Value::Nil);
}

fn assert_inspect(source: &str, expected: &str) {
    match eval(source) {
        Ok(value) => assert_eq!(value.to_string(), expected, "wrong inspect for {source:?}"),
        Err(error) => panic!("evaluation of {source:?} failed: {error}"),
    }
}

fn assert_runtime_error(source: &str, expected: &str) {
    match eval(source) {
        Err(InterpretError::Runtime(error)) => {
            assert_eq!(error.to_string(), expected, "wrong error for {source:?}");
        },
        Err(InterpretError::Parse(errors)) => {
            panic!("expected a runtime error for {source:?}, got parse errors: {errors:?}");
        },
        Ok(value) => panic!("expected an error for {source:?}, got {value}"),
    }
}

fn assert_parse_fails(source: &str) {
    match eval(source) {
        Err(InterpretError::Parse(errors)) => assert!(!errors.is_empty()),
        other => panic!("expected parse errors for {source:?}, got {other:?}"),
    }
}

fn assert_pretty_prints(source: &str, expected: &str) {
    let mut parser = Parser::new(tokenize(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "parse errors for {source:?}: {:?}",
            parser.errors());
    assert_eq!(program.to_string(), expected);
}

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "monkey")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = eval(&source) {
            panic!("demo script {path:?} failed:\n{e}");
        }
    }

    assert!(count > 0, "no demo scripts found in demos/");
}

#[test]
fn lexing_symbols_and_keywords() {
    let tokens = tokenize("let add = fn(x) { x != 5 && x == 0 || !true };");

    assert_eq!(tokens,
               vec![Token::Let,
                    Token::Identifier("add".to_owned()),
                    Token::Assign,
                    Token::Function,
                    Token::LParen,
                    Token::Identifier("x".to_owned()),
                    Token::RParen,
                    Token::LBrace,
                    Token::Identifier("x".to_owned()),
                    Token::NotEqual,
                    Token::Integer("5".to_owned()),
                    Token::And,
                    Token::Identifier("x".to_owned()),
                    Token::Equal,
                    Token::Integer("0".to_owned()),
                    Token::Or,
                    Token::Bang,
                    Token::True,
                    Token::RBrace,
                    Token::Semicolon]);
}

#[test]
fn lexing_trims_leading_zeros() {
    assert_eq!(tokenize("005"), vec![Token::Integer("5".to_owned())]);
    assert_eq!(tokenize("000"), vec![Token::Integer("0".to_owned())]);
    assert_integer("005 + 5", 10);
}

#[test]
fn lexing_splits_digits_out_of_identifiers() {
    // Identifiers may not contain digits, so `foo5` is two tokens.
    assert_eq!(tokenize("foo5"),
               vec![Token::Identifier("foo".to_owned()),
                    Token::Integer("5".to_owned())]);
}

#[test]
fn lexing_strings_without_escapes() {
    assert_eq!(tokenize("\"hello world\""),
               vec![Token::Str("hello world".to_owned())]);
    assert_eq!(tokenize("\"a\\b\""), vec![Token::Str("a\\b".to_owned())]);
}

#[test]
fn lexing_marks_unknown_bytes_illegal() {
    assert_eq!(tokenize("@"), vec![Token::Illegal("@".to_owned())]);

    // A lone `&` is not in the alphabet; only `&&` is.
    let tokens = tokenize("1 & 2");
    assert!(tokens.iter()
                  .any(|token| matches!(token, Token::Illegal(slice) if slice.starts_with('&'))),
            "{tokens:?}");
}

#[test]
fn operator_precedence_pretty_printing() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("2 % 3 + 1", "((2 % 3) + 1)"),
                 ("a == b && c || d", "(((a == b) && c) || d)"),
                 ("a || b && c", "(a || (b && c))"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5)", "add(a, b, 1, (2 * 3), (4 + 5))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in cases {
        assert_pretty_prints(source, expected);
    }
}

#[test]
fn pretty_printed_programs_reparse_to_the_same_tree() {
    let sources = ["let x = 5;",
                   "return 10;",
                   "return;",
                   "-a * b",
                   "if (x < y) { x } else { y }",
                   "if (x) { x; y; }",
                   "fn(x, y) { x + y; }",
                   "let mk = fn(x) { fn(y) { x + y } };",
                   "[1, 2 * 2, \"three\"]",
                   "{\"one\": 1, 2: \"two\", true: 3}",
                   "a[b + 1]",
                   "add(1, 2 * 3, add(4, 5))",
                   "!x && y || z"];

    for source in sources {
        let mut parser = Parser::new(tokenize(source));
        let first = parser.parse_program();
        assert!(parser.errors().is_empty(), "{source:?}: {:?}", parser.errors());

        let printed = first.to_string();
        let mut reparser = Parser::new(tokenize(&printed));
        let second = reparser.parse_program();
        assert!(reparser.errors().is_empty(),
                "{printed:?}: {:?}",
                reparser.errors());

        assert_eq!(first, second, "round-trip changed {source:?} (printed {printed:?})");
    }
}

#[test]
fn parser_reports_canonical_messages() {
    let cases = [("let x 5;", "expected next token to be =, got INT"),
                 ("let 5 = x;", "expected next token to be IDENT, got INT"),
                 ("let = 5;", "expected next token to be IDENT, got ="),
                 ("@", "no prefix parse function found for ILLEGAL"),
                 ("1 +", "no prefix parse function found for EOF"),
                 ("(1 + 2", "expected closing parenthesis"),
                 ("99999999999999999999", "couldn't parse \"99999999999999999999\" as integer")];

    for (source, expected) in cases {
        let mut parser = Parser::new(tokenize(source));
        parser.parse_program();
        let messages: Vec<String> = parser.errors().iter().map(ToString::to_string).collect();
        assert!(messages.iter().any(|m| m == expected),
                "{source:?} reported {messages:?}, expected {expected:?}");
    }
}

#[test]
fn parser_recovers_at_statement_boundaries() {
    let mut parser = Parser::new(tokenize("let x 5; let y = 10;"));
    let program = parser.parse_program();

    assert!(!parser.errors().is_empty());
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].to_string(), "let y = 10;");
}

#[test]
fn parser_rejects_ill_formed_input() {
    // Only that *some* error is reported; recovery is deliberately minimal.
    for source in ["fn(", "{1: }", "[1, 2", "if (x { 1 }", "let", "1 ++ 2"] {
        assert_parse_fails(source);
    }
}

#[test]
fn integer_arithmetic() {
    assert_integer("5", 5);
    assert_integer("-5", -5);
    assert_integer("5 + 5 * 2", 15);
    assert_integer("(5 + 5) * 2", 20);
    assert_integer("50 / 2 * 2 + 10", 60);
    assert_integer("2 * (5 + 10)", 30);
    assert_integer("-50 + 100 + -50", 0);
    assert_integer("3 * 3 * 3 + 10", 37);
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
    assert_integer("7 % 3", 1);
    assert_integer("-7 % 3", -1);
}

#[test]
fn boolean_expressions() {
    assert_boolean("true", true);
    assert_boolean("false", false);
    assert_boolean("1 < 2", true);
    assert_boolean("1 > 2", false);
    assert_boolean("1 == 1", true);
    assert_boolean("1 != 1", false);
    assert_boolean("true == true", true);
    assert_boolean("false == true", false);
    assert_boolean("true != false", true);
    assert_boolean("(1 < 2) == true", true);
    assert_boolean("(1 > 2) == true", false);
}

#[test]
fn bang_operator_is_truthiness_inversion() {
    assert_boolean("!true", false);
    assert_boolean("!false", true);
    assert_boolean("!5", false);
    assert_boolean("!0", false);
    assert_boolean("!\"\"", false);
    assert_boolean("!!true", true);
    assert_boolean("!!5", true);
    assert_boolean("!if (false) { 1 }", true);
}

#[test]
fn logical_operators_short_circuit_and_return_values() {
    // The right side is an unbound identifier: reaching it would error.
    assert_boolean("false && boom", false);
    assert_boolean("true || boom", true);

    assert_integer("true && 5", 5);
    assert_integer("1 && 2", 2);
    assert_integer("false || 3", 3);
    assert_integer("4 || boom", 4);
    assert_boolean("0 && true", true);

    assert_runtime_error("true && boom", "identifier not found: boom");
    assert_runtime_error("false || boom", "identifier not found: boom");
}

#[test]
fn conditionals() {
    assert_integer("if (true) { 10 }", 10);
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_nil("if (false) { 10 }");
    assert_nil("if (1 > 2) { 10 }");
    assert_nil("if (false) {}");
    assert_nil("if (true) {}");
}

#[test]
fn return_statements() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9;", 10);
    assert_integer("return 2 * 5; 9;", 10);
    assert_integer("9; return 10; 9;", 10);
    assert_nil("5; return; 10;");
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
}

#[test]
fn let_statements() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
    assert_nil("let a = 5;");
}

#[test]
fn function_application() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x; }(5)", 5);
    assert_nil("fn() {}()");
}

#[test]
fn closures_capture_their_defining_scope() {
    assert_integer("let mk = fn(x) { fn(y) { x + y } }; mk(2)(3)", 5);
    assert_integer("let newAdder = fn(x) { fn(y) { x + y }; }; \
                    let addTwo = newAdder(2); \
                    addTwo(2);",
                   4);

    // A closure sees bindings issued in its defining frame after creation,
    // which is what makes recursion through `let` work.
    assert_boolean("let counter = fn(x) { if (x > 100) { return true; } counter(x + 1); }; \
                    counter(0);",
                   true);
}

#[test]
fn functions_are_first_class_values() {
    assert_integer("let apply = fn(f, x) { f(x) }; apply(fn(n) { n + 1 }, 41)", 42);
    assert_inspect("fn(x) { x + 2; }", "fn(x) { (x + 2) }");
    assert_inspect("len", "<builtin len>");
}

#[test]
fn strings() {
    assert_value("\"foo\" + \"bar\"", &Value::from("foobar"));
    assert_value("\"foo\" + \"\"", &Value::from("foo"));
    assert_inspect("\"foo\" + \"bar\"", "\"foobar\"");
    assert_integer("len(\"\")", 0);
    assert_integer("len(\"four\")", 4);
    // len counts bytes, not characters.
    assert_integer("len(\"héllo\")", 6);
}

#[test]
fn arrays() {
    assert_value("[1, 2 * 2, 3 + 3]",
                 &Value::from(vec![Value::from(1), Value::from(4), Value::from(6)]));
    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("[1, 2, 3][2]", 3);
    assert_integer("let i = 0; [1][i];", 1);
    assert_integer("let arr = [1, 2, 3]; arr[1] + arr[2];", 5);
    assert_nil("[1, 2, 3][3]");
    assert_nil("[1, 2, 3][-1]");
    assert_inspect("push([], 1)", "[1]");
    assert_inspect("[1, \"two\", [3]]", "[1, \"two\", [3]]");
}

#[test]
fn array_builtins() {
    assert_integer("head([1, 2, 3])", 1);
    assert_nil("head([])");
    assert_integer("last([1, 2, 3])", 3);
    assert_nil("last([])");
    assert_inspect("tail([1, 2, 3])", "[2, 3]");
    assert_inspect("tail([])", "[]");
    assert_inspect("init([1, 2, 3])", "[1, 2]");
    assert_inspect("init([])", "[]");
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);

    // push is an immutable append.
    assert_inspect("let a = [1]; push(a, 2); a", "[1]");
}

#[test]
fn hashes() {
    let source = "let two = \"two\"; \
                  { \"one\": 10 - 9, two: 1 + 1, \"thr\" + \"ee\": 6 / 2, 4: 4, true: 5, \
                  false: 6 }";
    match eval(source) {
        Ok(Value::Hash(entries)) => assert_eq!(entries.len(), 6),
        other => panic!("expected a hash, got {other:?}"),
    }

    assert_integer("{\"one\": 1, \"two\": 2}[\"two\"]", 2);
    assert_integer("{4: 4}[4]", 4);
    assert_integer("{true: 5}[true]", 5);
    assert_integer("{false: 6}[false]", 6);
    assert_integer("{\"thr\" + \"ee\": 3}[\"three\"]", 3);
    assert_nil("{\"foo\": 1}[\"bar\"]");
    assert_nil("{}[\"foo\"]");
    assert_nil("{\"foo\": 5}[5]");
}

#[test]
fn hash_inspect_is_sorted_and_deterministic() {
    assert_inspect("{\"b\": 2, \"a\": 1, \"c\": 3}", "{\"a\": 1, \"b\": 2, \"c\": 3}");
    assert_inspect("{3: \"c\", 1: \"a\", 2: \"b\"}", "{1: \"a\", 2: \"b\", 3: \"c\"}");
    assert_inspect("{}", "{}");
}

#[test]
fn equality_falls_back_to_identity() {
    assert_boolean("[1, 2] == [1, 2]", false);
    assert_boolean("let a = [1, 2]; a == a", true);
    assert_boolean("let a = [1]; let b = a; a == b", true);
    assert_boolean("fn(x) { x } == fn(x) { x }", false);
    assert_boolean("let f = fn(x) { x }; f == f", true);
    assert_boolean("let h = {}; h == h", true);
    assert_boolean("{} != {}", true);
}

#[test]
fn first_error_wins() {
    assert_runtime_error("[1, foobar, bar]", "identifier not found: foobar");
    assert_runtime_error("{\"a\": 1, foobar: 2}", "identifier not found: foobar");
    assert_runtime_error("{\"a\": foobar, bar: 2}", "identifier not found: foobar");
    assert_runtime_error("let f = fn(x, y) { x }; f(foobar, bar)",
                         "identifier not found: foobar");
}

#[test]
fn runtime_errors_use_canonical_messages() {
    let cases = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 == true", "type mismatch: INTEGER == BOOLEAN"),
                 ("\"five\" != 5", "type mismatch: STRING != INTEGER"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("-\"str\"", "unknown operator: -STRING"),
                 ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("\"Hello\" - \"World\"", "unknown operator: STRING - STRING"),
                 ("\"a\" == \"a\"", "unknown operator: STRING == STRING"),
                 ("foobar", "identifier not found: foobar"),
                 ("fn(x) { x + y }(1)", "identifier not found: y"),
                 ("5 / 0", "division by zero"),
                 ("5 % 0", "division by zero"),
                 ("5(3)", "not a function: INTEGER"),
                 ("\"f\"(1)", "not a function: STRING"),
                 ("fn(x) { x }(1, 2)", "argument mismatch: got 2, want 1"),
                 ("fn(x, y) { x }(1)", "argument mismatch: got 1, want 2"),
                 ("len(1)", "argument to 'len' not supported, got INTEGER"),
                 ("head(1)", "argument to 'head' not supported, got INTEGER"),
                 ("tail(\"s\")", "argument to 'tail' not supported, got STRING"),
                 ("push(1, 1)", "argument to 'push' not supported, got INTEGER"),
                 ("len(\"one\", \"two\")", "wrong number of arguments. want 1, got 2"),
                 ("len()", "wrong number of arguments. want 1, got 0"),
                 ("push([1])", "wrong number of arguments. want 2, got 1"),
                 ("{\"name\": \"Monkey\"}[fn(x) { x }];",
                  "unusable as hash key: FUNCTION_OBJ"),
                 ("{fn(x) { x }: \"Monkey\"}", "unusable as hash key: FUNCTION_OBJ"),
                 ("{[1]: 1}", "unusable as hash key: ARRAY"),
                 ("5[0]", "index operator not supported: INTEGER"),
                 ("\"str\"[0]", "index operator not supported: STRING"),
                 ("[1, 2, 3][\"one\"]", "index operator not supported: ARRAY")];

    for (source, expected) in cases {
        assert_runtime_error(source, expected);
    }
}

#[test]
fn every_builtin_resolves_as_an_identifier() {
    for name in monkey::interpreter::evaluator::builtin::BUILTIN_FUNCTIONS {
        let result = eval(name).unwrap_or_else(|e| panic!("builtin {name} failed: {e}"));
        assert_eq!(result.to_string(), format!("<builtin {name}>"));
    }
}

#[test]
fn let_bindings_shadow_builtins() {
    assert_integer("let len = 5; len", 5);
    assert_integer("let push = fn(x) { x + 1 }; push(1)", 2);
}

#[test]
fn programs_yield_their_last_value() {
    assert_nil("");
    assert_integer("1; 2; 3", 3);
    assert_nil("let a = 1; let b = 2;");
}

#[test]
fn environment_persists_across_interpret_calls() {
    let env = Environment::new();

    interpret("let base = 40;", &env).expect("binding should succeed");
    let result = interpret("base + 2", &env).expect("lookup should succeed");

    assert_eq!(result, Value::from(42));
}
