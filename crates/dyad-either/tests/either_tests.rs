// Scenario tests for the Either operations, case by case

use dyad_classes::{self as classes, Identity};
use dyad_either::{Either, Left, Right, TYPE_IDENT};
use pretty_assertions::assert_eq;

fn inc(n: f64) -> f64 {
    n + 1.0
}

fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

fn square_root(n: f64) -> Either<&'static str, f64> {
    if n < 0.0 {
        Left("Cannot represent square root of negative number")
    } else {
        Right(n.sqrt())
    }
}

// Assert both the rendering and the law-abiding equality agree
fn assert_equivalent<A, B>(actual: &Either<A, B>, expected: &Either<A, B>)
where
    A: classes::Setoid + classes::Show,
    B: classes::Setoid + classes::Show,
{
    assert_eq!(actual.to_string(), expected.to_string());
    assert!(actual.equals(expected), "{} is not equivalent to {}", actual, expected);
}

#[test]
fn test_left_constructor() {
    let left: Either<i32, i32> = Left(42);
    assert!(left.is_left());
    assert!(!left.is_right());
    assert_eq!(classes::type_ident::<Either<i32, i32>>(), TYPE_IDENT);
    assert_eq!(TYPE_IDENT, "dyad/Either");
}

#[test]
fn test_right_constructor() {
    let right: Either<i32, i32> = Right(42);
    assert!(right.is_right());
    assert!(!right.is_left());
    assert_equivalent(&Either::<i32, i32>::of(42), &Right(42));
}

#[test]
fn test_left_alt() {
    assert_equivalent(&Left::<i32, i32>(1).alt(Left(2)), &Left(2));
    assert_equivalent(&Left::<i32, i32>(1).alt(Right(2)), &Right(2));
}

#[test]
fn test_right_alt() {
    assert_equivalent(&Right::<i32, i32>(1).alt(Left(2)), &Right(1));
    assert_equivalent(&Right::<i32, i32>(1).alt(Right(2)), &Right(1));
}

#[test]
fn test_left_ap() {
    assert_equivalent(&Left::<&str, f64>("abc").ap(Left::<_, fn(f64) -> f64>("xyz")), &Left("xyz"));
    assert_equivalent(&Left::<&str, f64>("abc").ap(Right(inc)), &Left("abc"));
}

#[test]
fn test_right_ap() {
    assert_equivalent(&Right::<&str, f64>(42.0).ap(Left::<_, fn(f64) -> f64>("abc")), &Left("abc"));
    assert_equivalent(&Right::<&str, f64>(42.0).ap(Right(inc)), &Right(43.0));
}

#[test]
fn test_bimap() {
    assert_equivalent(&Left::<&str, f64>("abc").bimap(to_upper, inc), &Left("ABC".to_string()));
    assert_equivalent(&Right::<&str, f64>(42.0).bimap(to_upper, inc), &Right(43.0));
}

#[test]
fn test_chain() {
    assert_equivalent(&Left::<&str, f64>("abc").chain(square_root), &Left("abc"));
    assert_equivalent(&Right(25.0).chain(square_root), &Right(5.0));
    assert_equivalent(
        &Right(-1.0).chain(square_root),
        &Left("Cannot represent square root of negative number"),
    );
}

#[test]
fn test_left_concat() {
    let abc: Either<String, String> = Left("abc".to_string());
    assert_equivalent(&abc.clone().concat(Left("def".to_string())), &Left("abcdef".to_string()));
    assert_equivalent(&abc.concat(Right("xyz".to_string())), &Right("xyz".to_string()));
}

#[test]
fn test_right_concat() {
    let abc: Either<String, String> = Right("abc".to_string());
    assert_equivalent(&abc.clone().concat(Left("xyz".to_string())), &Right("abc".to_string()));
    assert_equivalent(&abc.concat(Right("def".to_string())), &Right("abcdef".to_string()));

    let numbers: Either<String, Vec<i32>> = Right(vec![1, 2]);
    assert_equivalent(&numbers.concat(Right(vec![3, 4])), &Right(vec![1, 2, 3, 4]));
}

#[test]
fn test_equals() {
    assert!(Left::<i32, i32>(42).equals(&Left(42)));
    assert!(!Left::<i32, i32>(42).equals(&Left(43)));
    assert!(!Left::<i32, i32>(42).equals(&Right(42)));
    assert!(Right::<i32, i32>(42).equals(&Right(42)));
    assert!(!Right::<i32, i32>(42).equals(&Left(42)));
    assert!(Right::<i32, Vec<i32>>(vec![1, 2, 3]).equals(&Right(vec![1, 2, 3])));
}

#[test]
fn test_equals_is_value_based() {
    assert!(!Left::<f64, f64>(0.0).equals(&Left(-0.0)));
    assert!(!Left::<f64, f64>(-0.0).equals(&Left(0.0)));
    assert!(Left::<f64, f64>(f64::NAN).equals(&Left(f64::NAN)));
    assert!(!Right::<f64, f64>(0.0).equals(&Right(-0.0)));
    assert!(Right::<f64, f64>(f64::NAN).equals(&Right(f64::NAN)));
    assert!(Left::<Vec<i32>, f64>(vec![1, 2, 3]).equals(&Left(vec![1, 2, 3])));
}

#[test]
fn test_extend() {
    let halve = |e: &Either<&str, f64>| e.right().unwrap_or_default() / 2.0;
    assert_equivalent(&Left::<&str, f64>("abc").extend(halve), &Left("abc"));
    assert_equivalent(&Right::<&str, f64>(42.0).extend(halve), &Right(21.0));
}

#[test]
fn test_map() {
    assert_equivalent(&Left::<&str, f64>("abc").map(f64::sqrt), &Left("abc"));
    assert_equivalent(&Right::<&str, f64>(9.0).map(f64::sqrt), &Right(3.0));
    assert_equivalent(&Left::<&str, f64>("err").map(|x| x * 2.0), &Left("err"));
}

#[test]
fn test_reduce() {
    let subtract = |acc: f64, x: f64| acc - x;
    assert_eq!(Left::<&str, f64>("abc").reduce(subtract, 42.0), 42.0);
    assert_eq!(Right::<&str, f64>(5.0).reduce(subtract, 42.0), 37.0);
    assert_eq!(Right::<&str, f64>(3.0).reduce(|acc: f64, x: f64| acc.powi(x as i32), 10.0), 1000.0);
}

#[test]
fn test_traverse() {
    let words = |s: &'static str| s.split(' ').collect::<Vec<_>>();
    assert_eq!(Left::<&str, &str>("Request failed").traverse(words), vec![Left("Request failed")]);
    assert_eq!(
        Right::<&str, &str>("foo bar baz").traverse(words),
        vec![Right("foo"), Right("bar"), Right("baz")]
    );

    let mut called = false;
    let lifted = Left::<&str, i32>("e").traverse(|x| {
        called = true;
        Identity(x)
    });
    assert!(!called);
    assert_eq!(lifted, Identity(Left("e")));
}

#[test]
fn test_to_string() {
    assert_eq!(Left::<&str, i32>("abc").to_string(), "Left(\"abc\")");
    assert_eq!(Left::<&str, i32>("x").to_string(), "Left(\"x\")");
    assert_eq!(Right::<&str, i32>(42).to_string(), "Right(42)");
    assert_eq!(Right::<&str, Vec<i32>>(vec![1, 2, 3]).to_string(), "Right([1, 2, 3])");
    assert_eq!(Right::<&str, Either<i32, f64>>(Left(1)).to_string(), "Right(Left(1))");
    assert_eq!(Right::<(), f64>(1e21).to_string(), "Right(1e+21)");
    assert_eq!(Right::<(), f64>(1e-7).to_string(), "Right(1e-7)");
}

#[test]
fn test_inspect() {
    assert_eq!(Left::<&str, i32>("abc").inspect(), "Left(\"abc\")");
    assert_eq!(Right::<&str, Vec<i32>>(vec![1, 2, 3]).inspect(), "Right([1, 2, 3])");
}

#[test]
fn test_ordering() {
    assert!(Left::<i32, i32>(100).lte(&Right(0)));
    assert!(!Right::<i32, i32>(0).lte(&Left(100)));
    assert!(Left::<i32, i32>(1).lte(&Left(2)));
    assert!(!Right::<i32, i32>(2).lte(&Right(1)));
}

#[test]
fn test_generic_dispatch() {
    let right: Either<String, i32> = Right(1);
    let left: Either<String, i32> = Left("e".to_string());

    assert!(classes::equals(&right, &Right(1)));
    assert_equivalent(&classes::map(|x: i32| x + 1, right.clone()), &Right(2));
    assert_equivalent(&classes::map(|x: i32| x + 1, left.clone()), &left);
    assert_equivalent(&classes::of::<Either<String, ()>, _>(7), &Right::<String, i32>(7));
    assert_equivalent(&classes::alt(left.clone(), right.clone()), &right);
    assert_equivalent(&classes::chain(|x: i32| Right(x * 10), right.clone()), &Right(10));
    assert_eq!(classes::reduce(|acc: i32, x: i32| acc + x, 1, right.clone()), 2);
    assert_eq!(classes::show(&left), "Left(\"e\")");
    assert!(classes::lte(&left, &right));
    assert_equivalent(
        &classes::concat(Left::<String, String>("a".into()), Left("b".into())),
        &Left("ab".to_string()),
    );
    assert_equivalent(
        &<Either<String, i32> as classes::Bifunctor>::bimap(right.clone(), |s: String| s.len(), |x: i32| x * 3),
        &Right::<usize, i32>(3),
    );
    assert_equivalent(
        &classes::bimap(|s: String| s.len(), |x: i32| x * 3, left),
        &Left::<usize, i32>(1),
    );
    assert_equivalent(
        &classes::extend(|w: &Either<String, i32>| w.is_right(), right),
        &Right(true),
    );
}

#[test]
fn test_iteration_helpers() {
    let items: Vec<Either<&str, i32>> = vec![Left("a"), Right(1), Right(2)];
    assert_eq!(dyad_either::lefts(items.clone()), vec!["a"]);
    assert_eq!(dyad_either::rights(items.clone()), vec![1, 2]);
    assert_eq!(dyad_either::partition(items), (vec!["a"], vec![1, 2]));
}

#[test]
fn test_case_analysis() {
    let describe = |e: Either<&str, i32>| e.either(|s| format!("error: {}", s), |n| format!("value: {}", n));
    assert_eq!(describe(Left("boom")), "error: boom");
    assert_eq!(describe(Right(3)), "value: 3");
    assert_equivalent(&Right::<String, i32>(1).map_left(|s| s.len()), &Right(1));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_externally_tagged() {
    let right: Either<String, i32> = Right(42);
    let json = serde_json::to_string(&right).unwrap();
    assert_eq!(json, r#"{"Right":42}"#);

    let parsed: Either<String, i32> = serde_json::from_str(r#"{"Left":"bad"}"#).unwrap();
    assert_eq!(parsed, Left("bad".to_string()));
}

#[cfg(feature = "borsh")]
#[test]
fn test_borsh_round_trip() {
    let left: Either<String, u32> = Left("bad".to_string());
    let right: Either<String, u32> = Right(7);

    let left_bytes = borsh::to_vec(&left).unwrap();
    let right_bytes = borsh::to_vec(&right).unwrap();

    // One tag byte selects the case
    assert_eq!(left_bytes[0], 0);
    assert_eq!(right_bytes, vec![1, 7, 0, 0, 0]);

    assert_eq!(borsh::from_slice::<Either<String, u32>>(&left_bytes).unwrap(), left);
    assert_eq!(borsh::from_slice::<Either<String, u32>>(&right_bytes).unwrap(), right);
}
