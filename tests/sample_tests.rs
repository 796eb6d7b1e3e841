use approx::assert_relative_eq;
use mathviz::sample::{ParseSampleFnError, SampleFn};

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_eval_basic_functions() {
    assert_eq!(SampleFn::Constant(2.5).eval(100.0), 2.5);
    assert_eq!(SampleFn::Identity.eval(-3.0), -3.0);
    assert_relative_eq!(SampleFn::Sin.eval(std::f64::consts::FRAC_PI_2), 1.0);
    assert_relative_eq!(SampleFn::Cos.eval(0.0), 1.0);
}

#[test]
fn test_eval_polynomial_lowest_degree_first() {
    // 1 + 0x - 0.5x^2
    let p = SampleFn::Polynomial(vec![1.0, 0.0, -0.5]);
    assert_relative_eq!(p.eval(0.0), 1.0);
    assert_relative_eq!(p.eval(2.0), -1.0);
    assert_relative_eq!(p.eval(-4.0), -7.0);
}

#[test]
fn test_eval_standard_normal_peak() {
    let g = SampleFn::Gaussian {
        mean: 0.0,
        std_dev: 1.0,
    };
    assert_relative_eq!(g.eval(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
    assert_relative_eq!(g.eval(1.0), g.eval(-1.0));
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_all_forms() {
    assert_eq!("x".parse::<SampleFn>(), Ok(SampleFn::Identity));
    assert_eq!(" SIN ".parse::<SampleFn>(), Ok(SampleFn::Sin));
    assert_eq!("cos".parse::<SampleFn>(), Ok(SampleFn::Cos));
    assert_eq!("const:2.5".parse::<SampleFn>(), Ok(SampleFn::Constant(2.5)));
    assert_eq!(
        "poly:1, 0, -0.5".parse::<SampleFn>(),
        Ok(SampleFn::Polynomial(vec![1.0, 0.0, -0.5]))
    );
    assert_eq!(
        "gauss:0,2".parse::<SampleFn>(),
        Ok(SampleFn::Gaussian {
            mean: 0.0,
            std_dev: 2.0
        })
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "tan".parse::<SampleFn>(),
        Err(ParseSampleFnError::UnknownFunction("tan".into()))
    );
    assert_eq!(
        "poly:".parse::<SampleFn>(),
        Err(ParseSampleFnError::EmptyPolynomial)
    );
    assert_eq!(
        "gauss:0,0".parse::<SampleFn>(),
        Err(ParseSampleFnError::NonPositiveStdDev(0.0))
    );
    assert_eq!(
        "const:1,2".parse::<SampleFn>(),
        Err(ParseSampleFnError::ArgumentCount {
            name: "const",
            expected: 1,
            got: 2
        })
    );
    assert!(matches!(
        "poly:1,abc".parse::<SampleFn>(),
        Err(ParseSampleFnError::InvalidNumber { value, .. }) if value == "abc"
    ));
}

#[test]
fn test_display_parses_back() {
    for f in [
        SampleFn::Constant(-1.25),
        SampleFn::Identity,
        SampleFn::Polynomial(vec![0.5, 2.0, 3.0]),
        SampleFn::Sin,
        SampleFn::Cos,
        SampleFn::Gaussian {
            mean: 1.5,
            std_dev: 0.25,
        },
    ] {
        assert_eq!(f.to_string().parse::<SampleFn>(), Ok(f));
    }
}

#[test]
fn test_error_messages() {
    let err = "gauss:0,-1".parse::<SampleFn>().unwrap_err();
    assert_eq!(err.to_string(), "gaussian std_dev must be positive, got -1");
}
