use pseudotex::{Error, LexError, ParseError, convert, parse, to_latex, to_latex_bare};

fn lines(lines: &[&str]) -> String {
    lines.join("\n")
}

const BINARY_SEARCH: &str = "def binarySearch(numbers, target):
    low = 0
    high = len(numbers) - 1
    while low <= high:
        mid = (low + high) / 2
        if numbers[mid] == target:
            return mid
        elif numbers[mid] < target:
            low = mid + 1
        else:
            high = mid - 1
    return -1
";

const BUBBLE_SORT: &str = "def bubbleSort(a):
    n = len(a)
    for i in range(n):
        for j in range(0, n - i - 1):
            if a[j] > a[j + 1]:
                swap(a, j, j + 1)
    return a";

// ============================================================================
// End to End
// ============================================================================

#[test]
fn test_minimal_program() {
    assert_eq!(
        convert("def f():\n    a=4").unwrap(),
        lines(&[
            r"\begin{algorithm}",
            r"\caption{f}",
            r"\begin{algorithmic}",
            r"\Function{f}{}",
            r"\State $a \gets 4$",
            r"\EndFunction",
            r"\end{algorithmic}",
            r"\end{algorithm}",
        ])
    );
}

#[test]
fn test_binary_search() {
    let function = parse(BINARY_SEARCH).unwrap();
    assert_eq!(
        to_latex_bare(&function),
        lines(&[
            r"\Function{binarySearch}{numbers,target}",
            r"\State $low \gets 0$",
            r"\State $high \gets \Call{len}{numbers} - 1$",
            "",
            r"\While{$low <= high$}",
            r"\State $mid \gets (low + high) / 2$",
            "",
            r"\If{$numbers[mid] == target$}",
            r"\State \Return mid",
            r"\ElsIf{$numbers[mid] < target$}",
            r"\State $low \gets mid + 1$",
            "",
            r"\Else",
            r"\State $high \gets mid - 1$",
            r"\EndIf",
            r"\EndWhile",
            r"\State \Return -1",
            r"\EndFunction",
        ])
    );
}

#[test]
fn test_bubble_sort() {
    let function = parse(BUBBLE_SORT).unwrap();
    assert_eq!(
        to_latex_bare(&function),
        lines(&[
            r"\Function{bubbleSort}{a}",
            r"\State $n \gets \Call{len}{a}$",
            "",
            r"\For{$i = 0, \dots, n$}",
            "",
            r"\For{$j = 0, \dots, (n - i) - 1$}",
            "",
            r"\If{$a[j] > a[j + 1]$}",
            r"\State \Call{swap}{a,j,j + 1}",
            "",
            "",
            r"\EndIf",
            r"\EndFor",
            r"\EndFor",
            r"\State \Return a",
            r"\EndFunction",
        ])
    );
}

#[test]
fn test_convert_wraps_in_algorithm() {
    let function = parse(BUBBLE_SORT).unwrap();
    let latex = convert(BUBBLE_SORT).unwrap();
    assert_eq!(latex, to_latex(&function));
    assert!(latex.starts_with("\\begin{algorithm}\n\\caption{bubbleSort}\n\\begin{algorithmic}\n"));
    assert!(latex.ends_with("\\EndFunction\n\\end{algorithmic}\n\\end{algorithm}"));
}

#[test]
fn test_conversion_is_deterministic() {
    let first = convert(BINARY_SEARCH).unwrap();
    for _ in 0..3 {
        assert_eq!(convert(BINARY_SEARCH).unwrap(), first);
    }
}

#[test]
fn test_layout_insensitive_input() {
    let reference = convert(BINARY_SEARCH).unwrap();

    // CRLF line endings
    assert_eq!(convert(&BINARY_SEARCH.replace('\n', "\r\n")).unwrap(), reference);

    // blank and whitespace-only lines
    let spaced = BINARY_SEARCH.replace("    low = 0\n", "\n    low = 0\n      \n");
    assert_eq!(convert(&spaced).unwrap(), reference);

    // deeper indentation for the whole program
    let shifted: String = BINARY_SEARCH
        .lines()
        .map(|line| format!("    {}\n", line))
        .collect();
    assert_eq!(convert(&shifted).unwrap(), reference);

    // spacing around tokens
    let tight = BINARY_SEARCH.replace(" = ", "=").replace(" + ", "+");
    assert_eq!(convert(&tight).unwrap(), reference);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_lexical_error_stops_conversion() {
    let err = convert("def f():\n    a = 1\n\n    b = a & 2").unwrap_err();
    assert_eq!(
        err,
        Error::Lex(LexError::UnexpectedCharacter {
            character: '&',
            line: 4
        })
    );
    assert_eq!(err.line(), 4);
}

#[test]
fn test_parse_error_stops_conversion() {
    let err = convert("def f()\n    a = 1").unwrap_err();
    assert_eq!(
        err,
        Error::Parse(ParseError::UnexpectedToken {
            expected: "':'".into(),
            found: "NEWLINE".into(),
            line: 1,
        })
    );
    assert_eq!(err.to_string(), "Parse error: Expected ':', found NEWLINE on line 1");
}

#[test]
fn test_program_must_start_with_function() {
    let err = convert("a = 1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error: Expected 'def', found identifier 'a' on line 1"
    );

    let err = convert("").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error: Expected 'def', found end of input on line 1"
    );
}

#[test]
fn test_only_one_function() {
    let err = convert("def f():\n    a = 1\ndef g():\n    b = 2").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error: Expected end of input, found 'def' on line 3"
    );
}

#[test]
fn test_keyword_is_not_an_identifier() {
    let err = convert("def f():\n    while = 1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error: Expected expression, found '=' on line 2"
    );
}
