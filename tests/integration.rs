use std::str::from_utf8;

use solde::{
    bin_utils::app::{App, ExitStatus},
    config::Config,
};

const SESSION: &str = include_str!("session.txt");

fn run(args: &[&str], input: &str) -> (ExitStatus, String) {
    run_with_config(Config::default(), args, input)
}

fn run_with_config(config: Config, args: &[&str], input: &str) -> (ExitStatus, String) {
    let mut output = Vec::new();
    let app = App {
        config,
        input: input.as_bytes(),
        output: &mut output,
    };
    let args = std::iter::once("solde")
        .chain(args.iter().copied())
        .map(ToOwned::to_owned);
    let status = app.run(args).unwrap();
    (status, from_utf8(&output).unwrap().to_owned())
}

#[test]
fn deposits_and_withdrawal_from_zero() {
    let (status, output) = run(&[], "d\n10\nd\n10\nd\n10\nw\n5\nt\nq\n");
    assert_eq!(status, ExitStatus::Success);
    assert!(output.starts_with("Welcome to your bank.\nMy account: balance is $0.00.\n\n"));
    assert!(output.contains("My account: balance is $25.00.\n"));
    assert!(output.contains("withdraw        5.00       25.00\n"));
}

#[test]
fn withdrawals_from_starting_balance() {
    let (status, output) = run(&["100"], "w\n25\nw\n15\nw\n0.50\nd\n15\nq\n");
    assert_eq!(status, ExitStatus::Success);
    assert!(output.contains("My account: balance is $100.00.\n"));
    assert!(output.contains("My account: withdrawal $0.50.\n"));
    assert!(output.ends_with("My account: balance is $74.50.\n\nEnter d for a deposit, w for a withdrawal, t for the statement, or q to quit: "));
}

#[test]
fn insufficient_funds() {
    let (status, output) = run(&["10"], "w\n50\nt\nq\n");
    assert_eq!(status, ExitStatus::Success);
    assert!(output.contains("Sorry, your balance is insufficient!\n"));
    // statement holds the opening row only
    assert!(output.contains("--------  ----------  ----------\n                           10.00  \n\n"));
}

#[test]
fn recorded_session() {
    let (status, output) = run(&["20.00"], SESSION);
    assert_eq!(status, ExitStatus::Success);
    assert!(output.contains(concat!(
        "   op       amount     balance\n",
        "--------  ----------  ----------\n",
        "                           20.00  \n",
        "deposit         5.25       25.25\n",
        "withdraw       10.00       15.25\n",
        "deposit         0.01       15.26\n",
        "\n",
    )));
    assert_eq!(output.matches("Operation not allowed. Please try again.\n").count(), 1);
    assert_eq!(output.matches("You cannot provide fractions of a cent.\n").count(), 1);
}

#[test]
fn two_arguments_print_usage() {
    let (status, output) = run(&["1", "2"], "");
    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(
        output,
        "The arguments are invalid.\nusage: solde [-t|amount]\n  -t      run the self-test\n  amount  starting balance, at most two decimals\n"
    );
}

#[test]
fn invalid_starting_balances() {
    for (arg, message) in [
        ("-5", "The balance cannot be negative.\n"),
        ("five", "Please enter a valid balance.\n"),
        ("1.005", "You cannot provide fractions of a cent.\n"),
    ] {
        let (status, output) = run(&[arg], "q\n");
        assert_eq!(status, ExitStatus::Failure, "{arg}");
        assert!(output.starts_with(message), "{arg}");
        assert!(output.contains("usage: solde"), "{arg}");
        assert!(!output.contains("Welcome"), "{arg}");
    }
}

#[test]
fn self_test_flag() {
    let (status, output) = run(&["-t"], "");
    assert_eq!(status, ExitStatus::Success);
    assert!(output.ends_with("6 tests total\nall passed\n"));
}

#[test]
fn configured_defaults() {
    let config = Config {
        account_name: "Savings".to_string(),
        default_balance: "7.5".parse().unwrap(),
        show_balance_after_transaction: false,
    };
    let (status, output) = run_with_config(config, &[], "d\n1\nq\n");
    assert_eq!(status, ExitStatus::Success);
    assert!(output.contains("Savings: balance is $7.50.\n"));
    assert!(output.contains("Savings: deposit $1.00.\n"));
    assert!(!output.contains("balance is $8.50"));
}
