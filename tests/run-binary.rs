use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_canonical() {
    let output = r"Solving 3 missionaries and 3 cannibals with boat capacity 2 using breadth-first...
Found solution:
MMM CCC |\__/~~~~| ... ...
MMM C.. |~~~~\__/| ... CC.
MMM CC. |\__/~~~~| ... C..
MMM ... |~~~~\__/| ... CCC
MMM C.. |\__/~~~~| ... CC.
M.. C.. |~~~~\__/| MM. CC.
MM. CC. |\__/~~~~| M.. C..
... CC. |~~~~\__/| MMM C..
... CCC |\__/~~~~| MMM ...
... C.. |~~~~\__/| MMM CC.
... CC. |\__/~~~~| MMM C..
... ... |~~~~\__/| MMM CCC
CC> <C CC> <C MM> <MC MM> <C CC> <C CC>
Crossings: 11
";

    Command::main_binary()
        .unwrap()
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_counts() {
    let output = r"Solving 2 missionaries and 2 cannibals with boat capacity 2 using breadth-first...
Found solution:
(2, 2, left)
(2, 0, right)
(2, 1, left)
(0, 1, right)
(0, 2, left)
(0, 0, right)
CC> <C MM> <C CC>
Crossings: 5
";

    Command::main_binary()
        .unwrap()
        .args(&["-n", "2", "-b", "2", "--counts"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_stats_verbose() {
    let output = r"Solving 2 missionaries and 2 cannibals with boat capacity 2 using breadth-first...
Visited new depth: 0
created per depth: [1]
visited per depth: [1]
duplicates per depth: []
totals: 1 created, 1 visited, 0 duplicates

Visited new depth: 1
created per depth: [1, 4]
visited per depth: [1, 1]
duplicates per depth: []
totals: 5 created, 2 visited, 0 duplicates

Visited new depth: 2
created per depth: [1, 4, 1]
visited per depth: [1, 4, 1]
duplicates per depth: [0, 0, 5]
totals: 6 created, 6 visited, 5 duplicates

Visited new depth: 3
created per depth: [1, 4, 1, 1]
visited per depth: [1, 4, 1, 1]
duplicates per depth: [0, 0, 5, 2]
totals: 7 created, 7 visited, 7 duplicates

Visited new depth: 4
created per depth: [1, 4, 1, 1, 2]
visited per depth: [1, 4, 1, 1, 1]
duplicates per depth: [0, 0, 5, 2, 1]
totals: 9 created, 8 visited, 8 duplicates

Visited new depth: 5
created per depth: [1, 4, 1, 1, 2, 1]
visited per depth: [1, 4, 1, 1, 2, 1]
duplicates per depth: [0, 0, 5, 2, 1, 3]
totals: 10 created, 10 visited, 11 duplicates

States created total: 10
Unique visited total: 10
Reached duplicates total: 11
Created but not visited total: 0

Depth Created Unique Duplicates Unknown (not visited)
0:    1       1      0          0
1:    4       4      0          0
2:    1       1      5          0
3:    1       1      2          0
4:    2       2      1          0
5:    1       1      3          0

Found solution:
MM CC |\__/~~~~| .. ..
MM .. |~~~~\__/| .. CC
MM C. |\__/~~~~| .. C.
.. C. |~~~~\__/| MM C.
.. CC |\__/~~~~| MM ..
.. .. |~~~~\__/| MM CC
CC> <C MM> <C CC>
Crossings: 5
";

    Command::main_binary()
        .unwrap()
        .args(&["-n", "2", "-b", "2", "--stats", "--verbose"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution() {
    let output = r"Solving 1 missionaries and 1 cannibals with boat capacity 1 using breadth-first...
No solution
";

    Command::main_binary()
        .unwrap()
        .args(&["--travelers", "1", "--capacity", "1"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_step_budget() {
    let output = r"Solving 3 missionaries and 3 cannibals with boat capacity 2 using depth-first...
No solution found within the step budget
";

    Command::main_binary()
        .unwrap()
        .args(&["--method", "dfs", "--max-steps", "5"])
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn run_zero_capacity() {
    Command::main_binary()
        .unwrap()
        .args(&["-b", "0"])
        .assert()
        .failure()
        .stdout("Boat capacity must be at least 1\n");
}
