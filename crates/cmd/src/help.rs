// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub const HELP_TEXT: &str = "\
Commands:
pwd                         Prints the current working directory.
mkdir <path>                Creates a new directory; parent directories must exist.
cd <path|link>              Changes the current working directory.
ls [path|link]              Lists the entries of the current or given directory.
rm <name> [recursive]       Removes an entry of the current directory, or a link.
                            Set recursive to true to remove a populated directory.
mkfile <name>               Creates a new empty file in the current directory.
writefile <name> [text...]  Appends text to a file in the current directory.
readfile <name|link>        Prints the contents of a file.
mvfile <name> <target>      Moves a file into the target directory.
find <name> <recursive>     Finds entries by name. Set recursive to true to
                            search the whole tree.
link <target> <name>        Creates a hard link to a file.
symlink <target> <name>     Creates a symbolic link to a file or directory.
-------------------------
help                        Displays this help menu.
exit                        Exits the program.";
