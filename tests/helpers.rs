// SPDX-FileCopyrightText: 2026 Codegroom Contributors
//
// SPDX-License-Identifier: MIT

/// A program with known structure: 4 functions (methods included), 1 class,
/// 3 imports, 5 comment lines, 35 lines total.
#[allow(dead_code)]
pub const COUNTED_PROGRAM: &str = "\
# module header comment
import os
import sys
from typing import List

# a section divider comment
CONSTANT = 42


def first(x):
    # explains the doubling
    return x * 2


def second(items: List[int]):
    total = 0
    for item in items:
        total += item
    return total


class Box:
    # stored value
    def __init__(self, value):
        self.value = value

    @property
    def doubled(self):
        return first(self.value)


# trailing comment
if __name__ == \"__main__\":
    box = Box(CONSTANT)
    print(box.doubled)
";

/// Every scope carries a docstring; used by the docstring-stripping tests.
#[allow(dead_code)]
pub const DOCUMENTED_PROGRAM: &str = r#""""Module docstring."""


def greet(name):
    """Say hello."""
    return f"hello {name}"


class Greeter:
    """Holds a greeting."""

    def only_doc(self):
        """Nothing but this docstring."""
"#;

#[allow(dead_code)]
pub const NESTED_FUNCTIONS: &str = "\
def outer(x):
    def inner(y):
        return y + 1
    return inner(x) * 2


async def fetch(url):
    return await get(url)
";
