// Copyright 2026 The route-trie Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end scenarios built from concrete route tables, exercising precedence, backtracking
//! and prefix compression together rather than in isolation.

use route_trie::Builder;

#[test]
fn literal_prefix_compression_and_wildcards() {
    let mut builder = Builder::new();
    builder.add("/abc/123", 1).unwrap();
    builder.add("/abc/133", 2).unwrap();
    builder.add("/abc/134", 3).unwrap();
    builder.add("/abc/134", 1).unwrap();
    builder.add("/abc/134/*", 4).unwrap();
    builder.add("/abc/124/:", 2).unwrap();
    let trie = builder.build().unwrap();

    let intermediate = trie.find_node("/abc/1", false).unwrap();
    assert!(intermediate.values().is_empty());

    let three = trie.find_node("/abc/123", false).unwrap();
    assert_eq!(three.values(), &[1]);

    let four = trie.find_node("/abc/134", false).unwrap();
    assert_eq!(four.values(), &[3, 1]);

    let catchall = trie.find_node("/abc/134/5678", false).unwrap();
    assert_eq!(catchall.path(), "*");
    assert_eq!(catchall.values(), &[4]);

    let catchall_deep = trie.find_node("/abc/134/5/6/7/8", false).unwrap();
    assert_eq!(catchall_deep.path(), "*");
    assert_eq!(catchall_deep.values(), &[4]);

    let param = trie.find_node("/abc/124/5678", false).unwrap();
    assert_eq!(param.path(), ":");
    assert_eq!(param.values(), &[2]);

    assert!(trie.find_node("/abc/124/5/6/7/8", false).is_none());
    assert!(trie.find_node("/abc/111", false).is_none());
}

#[test]
fn precedence_across_exact_parameter_and_catchall() {
    let mut builder = Builder::new();
    builder.add("/users/:", 0).unwrap();
    builder.add("/users/:", 1).unwrap();
    builder.add("/users/:/movies", 2).unwrap();
    builder.add("/users/:/books", 3).unwrap();
    builder.add("/users/:/books/harry_potter", 4).unwrap();
    builder.add("/users/:/books/harry_potter*", 5).unwrap();
    builder.add("/users/:/books/:", 6).unwrap();
    builder.add("/users/:/movies/*", 7).unwrap();
    builder.add("/:", 8).unwrap();
    builder.add("/*", 9).unwrap();
    let trie = builder.build().unwrap();

    assert_eq!(trie.find("/users/tom"), vec![&0, &1]);
    let all = trie.find_all("/users/tom");
    for expected in [&0, &1, &9] {
        assert!(all.contains(&expected), "missing {expected} in {all:?}");
    }

    assert_eq!(trie.find("/users/tom/movies"), vec![&2]);

    assert_eq!(trie.find("/users/tom/books/harry_potter"), vec![&4]);
    let all = trie.find_all("/users/tom/books/harry_potter");
    for expected in [&4, &5, &6] {
        assert!(all.contains(&expected), "missing {expected} in {all:?}");
    }

    assert_eq!(trie.find("/users/tom/books/harry_potter1"), vec![&5]);
    assert_eq!(trie.find("/users/tom/books/the_hunger_games"), vec![&6]);
    assert_eq!(trie.find("/users/tom/movies/dunkirk"), vec![&7]);
    assert_eq!(trie.find("/faq"), vec![&8]);
    assert_eq!(trie.find("/events/2017"), vec![&9]);
    assert_eq!(trie.find("/"), vec![&9]);
}

#[test]
fn find_all_includes_every_precedence_tier() {
    let mut builder = Builder::new();
    builder.add("/users/:", 0).unwrap();
    builder.add("/users/*", 1).unwrap();
    builder.add("/users/:/movies/*", 7).unwrap();
    builder.add("/:", 8).unwrap();
    builder.add("/*", 9).unwrap();
    let trie = builder.build().unwrap();

    let all = trie.find_all("/users/1");
    for expected in [&0, &1, &9] {
        assert!(all.contains(&expected), "missing {expected} in {all:?}");
    }

    let all = trie.find_all("/users/1/movies/1");
    for expected in [&7, &1, &9] {
        assert!(all.contains(&expected), "missing {expected} in {all:?}");
    }
}

#[test]
fn negative_build_scenarios() {
    let empty: Builder<i32> = Builder::new();
    assert!(empty.build().is_err());

    for pattern in ["*", "*012", ":", ":012"] {
        let mut builder = Builder::new();
        assert!(builder.add(pattern, 1).is_err(), "{pattern} should be rejected");
    }

    let mut builder = Builder::new();
    assert!(builder.add("/*abc", 1).is_ok());
    assert!(builder.build().is_err());
}

#[test]
fn prefix_compression_is_order_independent() {
    let mut forward = Builder::new();
    forward.add("/abc/123", 1).unwrap();
    forward.add("/abc/133", 2).unwrap();
    let forward = forward.build().unwrap();

    let mut backward = Builder::new();
    backward.add("/abc/133", 2).unwrap();
    backward.add("/abc/123", 1).unwrap();
    let backward = backward.build().unwrap();

    for path in ["/abc/123", "/abc/133", "/abc/1", "/abc/9"] {
        assert_eq!(
            forward.find(path),
            backward.find(path),
            "mismatch for {path}"
        );
    }
}
